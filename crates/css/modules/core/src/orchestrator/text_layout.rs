//! Text leaves: wrap the content into line boxes inside the content box.

use css_box::clamp::non_negative;
use css_box::{Constraints, Size, UNBOUNDED};
use css_text::layout_text;
use log::trace;

use super::Fragment;
use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::resolve_box;
use crate::chapter10::{used_height, used_width};

/// Lay out a text leaf.
///
/// The text wraps at the used width when one is known and otherwise runs
/// unwrapped, the box shrinking to the widest line. Lines are aligned
/// against the final content width.
pub fn compute_text(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Fragment {
    let style = &node.style;
    let boxed = resolve_box(style, ctx);
    let horizontal_inset = boxed.horizontal_inset();
    let vertical_inset = boxed.vertical_inset();
    let content = node.text.as_deref().unwrap_or_default();

    let used = used_width(node, &boxed, constraints, ctx).settle(boxed.width_limits);
    let wrap_width = used.map_or(UNBOUNDED, |width| non_negative(width - horizontal_inset));
    let mut lines = layout_text(content, &style.text, wrap_width, ctx.measurer);
    let width = used.unwrap_or_else(|| boxed.width_limits.clamp(lines.width + horizontal_inset));
    lines.align(non_negative(width - horizontal_inset), style.text.text_align);
    let height = used_height(node, &boxed, constraints)
        .settle(boxed.height_limits)
        .unwrap_or_else(|| boxed.height_limits.clamp(lines.height + vertical_inset));
    let baseline = lines
        .first_baseline()
        .map(|baseline| baseline + boxed.sides.content_origin().y);
    trace!(
        target: "css::core::text",
        "[TEXT] lines={} width={width:.3} height={height:.3}",
        lines.lines.len()
    );
    Fragment {
        size: constraints.constrain(Size::new(width, height)),
        baseline,
        children: Vec::new(),
        text_layout: Some(lines),
    }
}
