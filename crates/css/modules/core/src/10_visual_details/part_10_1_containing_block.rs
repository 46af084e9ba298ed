//! Spec: CSS 2.2 §10.1 Definition of "containing block"
//!
//! Rectangles are expressed relative to the content-box origin of the box
//! whose children are being positioned.

use css_box::clamp::non_negative;
use css_box::{Point, Rect, Size};

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::resolve_box;

/// Spec: §10.1 item 4 — Padding box of `parent`, the containing block of its
/// absolutely positioned children.
pub fn padding_box(parent: &Node, ctx: &LayoutContext<'_>) -> Rect {
    let sides = resolve_box(&parent.style, ctx).sides;
    let origin = sides.content_origin();
    Rect::new(
        sides.border.left - origin.x,
        sides.border.top - origin.y,
        non_negative(parent.rect.width - sides.border.horizontal()),
        non_negative(parent.rect.height - sides.border.vertical()),
    )
}

/// Spec: §10.1 item 3 — The viewport, seen from a content box whose origin
/// sits at `content_origin` in root coordinates.
pub fn viewport_box(viewport: Size, content_origin: Point) -> Rect {
    Rect::new(
        -content_origin.x,
        -content_origin.y,
        viewport.width,
        viewport.height,
    )
}
