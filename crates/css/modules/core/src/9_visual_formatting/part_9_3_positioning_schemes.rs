//! Spec: CSS 2.2 §9.3 Positioning schemes; §10.3.7 and §10.6.4 absolutely
//! positioned, non-replaced elements
//!
//! Runs after normal-flow layout. Absolutely positioned boxes are placed in
//! their parent's padding box and fixed boxes in the viewport. Relative and
//! sticky boxes already carry their offset from the flow pass.

use css_box::clamp::non_negative;
use css_box::{Constraints, Point, Rect, Size, UNBOUNDED};
use css_values_units::Length;
use log::debug;

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::resolve_box;
use crate::chapter10::{padding_box, viewport_box};
use crate::orchestrator::layout;
use crate::sizing::fit_content_width;
use crate::style_model::{Display, Position};

/// Lay out `root`, then place every positioned box in the tree.
///
/// `viewport` is the containing block of `position: fixed` boxes.
pub fn layout_with_positioning(
    root: &mut Node,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
    viewport: Size,
) -> Size {
    let size = layout(root, constraints, ctx);
    let origin = content_origin(root, ctx, root.rect.origin());
    position_children(root, ctx, viewport, origin);
    size
}

/// Root coordinates of the content box of a node whose border box starts at `border_origin`.
fn content_origin(node: &Node, ctx: &LayoutContext<'_>, border_origin: Point) -> Point {
    let offset = resolve_box(&node.style, ctx).sides.content_origin();
    Point::new(border_origin.x + offset.x, border_origin.y + offset.y)
}

fn position_children(
    parent: &mut Node,
    ctx: &LayoutContext<'_>,
    viewport: Size,
    parent_origin: Point,
) {
    let containing = padding_box(parent, ctx);
    let fixed = viewport_box(viewport, parent_origin);
    for child in &mut parent.children {
        if child.style.display == Display::None {
            continue;
        }
        match child.style.position {
            Position::Absolute => place_out_of_flow(child, containing, ctx),
            Position::Fixed => place_out_of_flow(child, fixed, ctx),
            Position::Relative | Position::Sticky | Position::Static => {}
        }
        let border_origin = Point::new(
            parent_origin.x + child.rect.x,
            parent_origin.y + child.rect.y,
        );
        let child_origin = content_origin(child, ctx, border_origin);
        position_children(child, ctx, viewport, child_origin);
    }
}

/// Spec: §10.3.7 — Size and place an out-of-flow box inside `containing`.
///
/// Opposing insets both set stretch an `auto` size between them; otherwise
/// an `auto` width shrinks to fit. A box with neither inset on an axis stays
/// at the parent's content-box start.
fn place_out_of_flow(child: &mut Node, containing: Rect, ctx: &LayoutContext<'_>) {
    let boxed = resolve_box(&child.style, ctx);
    let margin = boxed.sides.margin;
    let text = &child.style.text;
    let px = |side: Option<Length>| side.map(|length| ctx.px(length, text));
    let top = px(child.style.inset.top);
    let right = px(child.style.inset.right);
    let bottom = px(child.style.inset.bottom);
    let left = px(child.style.inset.left);
    let room_width = non_negative(
        containing.width - left.unwrap_or(0.0) - right.unwrap_or(0.0) - margin.horizontal(),
    );
    let room_height = non_negative(
        containing.height - top.unwrap_or(0.0) - bottom.unwrap_or(0.0) - margin.vertical(),
    );
    let (min_width, max_width) = if boxed.width.is_some() {
        (0.0, UNBOUNDED)
    } else if left.is_some() && right.is_some() {
        (room_width, room_width)
    } else {
        let fit = fit_content_width(child, ctx, room_width, None);
        (fit, fit)
    };
    let (min_height, max_height) = if boxed.height.is_none() && top.is_some() && bottom.is_some() {
        (room_height, room_height)
    } else {
        (0.0, UNBOUNDED)
    };
    let size = layout(
        child,
        Constraints {
            min_width,
            max_width,
            min_height,
            max_height,
        },
        ctx,
    );
    child.rect.x = match (left, right) {
        (Some(offset), _) => containing.x + offset + margin.left,
        (None, Some(offset)) => containing.right() - offset - margin.right - size.width,
        (None, None) => margin.left,
    };
    child.rect.y = match (top, bottom) {
        (Some(offset), _) => containing.y + offset + margin.top,
        (None, Some(offset)) => containing.bottom() - offset - margin.bottom - size.height,
        (None, None) => margin.top,
    };
    debug!(
        target: "css::core::positioning",
        "[POSITION] {:?} at ({:.3}, {:.3}) size={:.3}x{:.3}",
        child.style.position,
        child.rect.x,
        child.rect.y,
        size.width,
        size.height
    );
}
