//! Intrinsic inline sizes: min-content, max-content and fit-content.
//!
//! Spec: CSS Box Sizing L3 §5 Intrinsic Size Determination
//!   - <https://www.w3.org/TR/css-sizing-3/#intrinsic-sizes>
//!
//! Widths are border-box sizes without margins; contributions add the
//! margins and honour a declared width. Boxes in vertical writing modes are
//! measured by laying them out, since their width is a block-axis extent.

use css_box::Constraints;
use css_flexbox::FlexWrap;
use css_values_units::Dimension;
use log::trace;

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::resolve_box;
use crate::orchestrator::{grid_intrinsic_inline_size, measure};
use crate::style_model::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Intrinsic {
    Min,
    Max,
}

/// Narrowest border-box width the content fits in without overflowing.
pub fn min_content_width(node: &Node, ctx: &LayoutContext<'_>) -> f32 {
    intrinsic_width(node, ctx, Intrinsic::Min)
}

/// Border-box width of the content laid out without soft wrapping.
pub fn max_content_width(node: &Node, ctx: &LayoutContext<'_>) -> f32 {
    intrinsic_width(node, ctx, Intrinsic::Max)
}

/// `min(max-content, max(min-content, limit))`, where the limit is the
/// `fit-content(<length>)` argument or else the available width.
pub fn fit_content_width(
    node: &Node,
    ctx: &LayoutContext<'_>,
    available: f32,
    limit: Option<f32>,
) -> f32 {
    let min = min_content_width(node, ctx);
    let max = max_content_width(node, ctx);
    max.min(min.max(limit.unwrap_or(available)))
}

/// Outer min-content width: what the box asks of its parent at minimum.
pub fn min_content_contribution(node: &Node, ctx: &LayoutContext<'_>) -> f32 {
    contribution(node, ctx, Intrinsic::Min)
}

/// Outer max-content width.
pub fn max_content_contribution(node: &Node, ctx: &LayoutContext<'_>) -> f32 {
    contribution(node, ctx, Intrinsic::Max)
}

fn contribution(node: &Node, ctx: &LayoutContext<'_>, kind: Intrinsic) -> f32 {
    if node.style.display == Display::None {
        return 0.0;
    }
    let boxed = resolve_box(&node.style, ctx);
    let inner = match node.style.width {
        Dimension::Length(_) => boxed.width,
        Dimension::MinContent => Some(min_content_width(node, ctx)),
        Dimension::MaxContent => Some(max_content_width(node, ctx)),
        Dimension::Auto | Dimension::FitContent(_) => None,
    }
    .unwrap_or_else(|| intrinsic_width(node, ctx, kind));
    boxed.width_limits.clamp(inner) + boxed.sides.margin.horizontal()
}

fn intrinsic_width(node: &Node, ctx: &LayoutContext<'_>, kind: Intrinsic) -> f32 {
    if node.style.display == Display::None {
        return 0.0;
    }
    if node.style.writing_mode.is_vertical() {
        return measure(node, Constraints::unconstrained(), ctx).size.width;
    }
    let inset = resolve_box(&node.style, ctx).horizontal_inset();
    let content = match node.style.display {
        Display::Flex => flex_content_width(node, ctx, kind),
        Display::Grid => {
            let available = match kind {
                Intrinsic::Min => 0.0,
                Intrinsic::Max => f32::INFINITY,
            };
            grid_intrinsic_inline_size(node, ctx, available)
        }
        Display::Block | Display::None => node.text.as_deref().map_or_else(
            || block_content_width(node, ctx, kind),
            |text| match kind {
                Intrinsic::Min => css_text::min_content_width(text, &node.style.text, ctx.measurer),
                Intrinsic::Max => css_text::max_content_width(text, &node.style.text, ctx.measurer),
            },
        ),
    };
    trace!(
        target: "css::core::sizing",
        "[INTRINSIC] kind={kind:?} display={:?} content={content:.3} inset={inset:.3}",
        node.style.display
    );
    content + inset
}

/// Widest in-flow child contribution.
fn block_content_width(node: &Node, ctx: &LayoutContext<'_>, kind: Intrinsic) -> f32 {
    node.children
        .iter()
        .filter(|child| child.is_in_flow())
        .map(|child| contribution(child, ctx, kind))
        .fold(0.0f32, f32::max)
}

/// Rows lay items side by side (a wrapping row's min-content is its widest
/// item); columns stack them.
fn flex_content_width(node: &Node, ctx: &LayoutContext<'_>, kind: Intrinsic) -> f32 {
    let style = &node.style;
    if !style.flex_direction.is_row() {
        return block_content_width(node, ctx, kind);
    }
    if kind == Intrinsic::Min && style.flex_wrap != FlexWrap::Nowrap {
        return block_content_width(node, ctx, kind);
    }
    let contributions: Vec<f32> = node
        .children
        .iter()
        .filter(|child| child.is_in_flow())
        .map(|child| contribution(child, ctx, kind))
        .collect();
    let gaps =
        ctx.px(style.column_gap(), &style.text) * contributions.len().saturating_sub(1) as f32;
    contributions.iter().sum::<f32>() + gaps
}
