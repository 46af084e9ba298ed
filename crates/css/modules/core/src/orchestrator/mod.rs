//! Layout entry points and the display-mode dispatcher.
//!
//! Every algorithm computes a [`Fragment`] from a shared borrow of its node:
//! the node's size and baseline plus where each in-flow child goes. Children
//! are sized through [`measure`], which caches by node and constraints.
//! [`layout`] then writes the node's rectangle and lays every placed child
//! out at its final size, so a rectangle is written once per pass. Relative
//! and sticky offsets are folded into that write.

mod flex_layout;
mod grid_layout;
mod text_layout;

use css_box::{Constraints, Rect, Size};
use css_text::TextLayout;
use css_writing_modes::{LogicalRect, WritingMode, logical_to_physical};
use log::debug;

use crate::box_tree::{LayoutContext, Measured, Node};
use crate::chapter9::{compute_block, relative_offset};
use crate::style_model::Display;

pub use flex_layout::compute_flex;
pub use grid_layout::{compute_grid, grid_intrinsic_inline_size};
pub use text_layout::compute_text;

/// Where one in-flow child goes, relative to the parent's content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildFrame {
    /// Index into the parent's `children`.
    pub index: usize,
    pub rect: Rect,
}

/// Result of running one layout algorithm on one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    /// Border-box size, already clamped into the constraints.
    pub size: Size,
    /// First baseline from the top of the border box.
    pub baseline: Option<f32>,
    pub children: Vec<ChildFrame>,
    pub text_layout: Option<TextLayout>,
}

impl Fragment {
    #[inline]
    pub const fn measured(&self) -> Measured {
        Measured {
            size: self.size,
            baseline: self.baseline,
        }
    }
}

type Algorithm = fn(&Node, Constraints, &LayoutContext<'_>) -> Fragment;

/// Lay out `node` and its subtree under `constraints`, returning its border-box size.
///
/// Writes the node's width and height; its position belongs to the parent.
pub fn layout(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    apply(node, constraints, ctx, compute)
}

/// Lay out `node` as a block container whatever its display.
pub fn layout_block(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    apply(node, constraints, ctx, compute_block)
}

/// Lay out `node` as a flex container whatever its display.
pub fn layout_flexbox(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    apply(node, constraints, ctx, compute_flex)
}

/// Lay out `node` as a grid container whatever its display.
pub fn layout_grid(node: &mut Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Size {
    apply(node, constraints, ctx, compute_grid)
}

/// Size `node` under `constraints` without writing anything to the tree.
pub fn measure(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Measured {
    if let Some(hit) = ctx.cached(node, constraints) {
        return hit;
    }
    let measured = compute(node, constraints, ctx).measured();
    ctx.store(node, constraints, measured);
    measured
}

/// The one place display is branched on.
fn compute(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Fragment {
    debug!(
        target: "css::core::dispatch",
        "[DISPATCH] display={:?} text={} width=[{:.3}, {:.3}] height=[{:.3}, {:.3}]",
        node.style.display,
        node.is_text(),
        constraints.min_width,
        constraints.max_width,
        constraints.min_height,
        constraints.max_height
    );
    match node.style.display {
        Display::None => Fragment::default(),
        Display::Flex => compute_flex(node, constraints, ctx),
        Display::Grid => compute_grid(node, constraints, ctx),
        Display::Block if node.is_text() => compute_text(node, constraints, ctx),
        Display::Block => compute_block(node, constraints, ctx),
    }
}

fn apply(
    node: &mut Node,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
    algorithm: Algorithm,
) -> Size {
    let fragment = algorithm(node, constraints, ctx);
    ctx.store(node, constraints, fragment.measured());
    node.rect.width = fragment.size.width;
    node.rect.height = fragment.size.height;
    node.baseline = fragment.baseline;
    node.text_layout = fragment.text_layout;
    for child in &mut node.children {
        if child.style.display == Display::None {
            hide(child);
        }
    }
    for frame in fragment.children {
        let Some(child) = node.children.get_mut(frame.index) else {
            continue;
        };
        layout(
            child,
            Constraints::tight(frame.rect.width, frame.rect.height),
            ctx,
        );
        let (dx, dy) = if child.style.position.is_offset_in_flow() {
            relative_offset(&child.style, ctx)
        } else {
            (0.0, 0.0)
        };
        let placed = frame.rect.translated(dx, dy);
        child.rect.x = placed.x;
        child.rect.y = placed.y;
    }
    fragment.size
}

/// A `display: none` subtree generates no boxes.
fn hide(node: &mut Node) {
    node.rect = Rect::ZERO;
    node.baseline = None;
    node.text_layout = None;
    for child in &mut node.children {
        hide(child);
    }
}

/// Constraints from flow-relative `(min, max)` pairs.
pub fn flow_constraints(
    mode: WritingMode,
    (min_inline, max_inline): (f32, f32),
    (min_block, max_block): (f32, f32),
) -> Constraints {
    let constraints = Constraints {
        min_width: min_inline,
        max_width: max_inline,
        min_height: min_block,
        max_height: max_block,
    };
    if mode.is_vertical() {
        constraints.transposed()
    } else {
        constraints
    }
}

/// Place a child given in flow-relative coordinates inside a content box of
/// the given block size.
#[inline]
pub fn physical_frame(
    index: usize,
    rect: LogicalRect,
    mode: WritingMode,
    content_block_size: f32,
) -> ChildFrame {
    ChildFrame {
        index,
        rect: logical_to_physical(rect, mode, content_block_size),
    }
}

#[cfg(test)]
mod tests;
