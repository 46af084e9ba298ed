//! Spec: CSS 2.2 §9.4.3 Relative positioning

use css_values_units::Length;

use crate::box_tree::LayoutContext;
use crate::style_model::Style;

/// Spec: §9.4.3 — Offset of a relatively positioned box from its normal-flow
/// position, as `(dx, dy)`.
///
/// `left` wins over `right` and `top` over `bottom`; `auto` on both sides
/// leaves the axis alone.
pub fn relative_offset(style: &Style, ctx: &LayoutContext<'_>) -> (f32, f32) {
    let px = |side: Option<Length>| side.map(|length| ctx.px(length, &style.text));
    let dx = px(style.inset.left)
        .or_else(|| px(style.inset.right).map(|right| -right))
        .unwrap_or(0.0);
    let dy = px(style.inset.top)
        .or_else(|| px(style.inset.bottom).map(|bottom| -bottom))
        .unwrap_or(0.0);
    (dx, dy)
}
