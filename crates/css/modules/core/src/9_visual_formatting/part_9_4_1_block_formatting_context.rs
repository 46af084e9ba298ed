//! Spec: CSS 2.2 §9.4.1 Block formatting contexts
//!
//! In-flow children stack along the block axis from the block-start edge of
//! the content box. Adjoining sibling margins collapse; a container's own
//! margins never collapse with its children's.

use css_box::clamp::non_negative;
use css_box::{Constraints, UNBOUNDED};
use css_values_units::Dimension;
use css_writing_modes::{LogicalRect, LogicalSize};
use log::debug;

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::{collapsed_gap, resolve_box};
use crate::chapter10::resolve_flow_size;
use crate::orchestrator::{Fragment, flow_constraints, measure, physical_frame};

/// Children stacked in flow-relative coordinates.
#[derive(Debug, Default)]
struct Stack {
    frames: Vec<(usize, LogicalRect)>,
    /// Block extent, including the last child's block-end margin.
    extent: f32,
    /// Widest outer inline size.
    max_inline: f32,
    /// First baseline from the content-box block-start edge.
    baseline: Option<f32>,
}

/// Spec: §9.4.1 — Lay out `node` as a block container.
///
/// An `auto` inline size fills a bounded available size; when unbounded the
/// box shrinks to its widest child and the children are stacked again at
/// that size.
pub fn compute_block(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Fragment {
    let mode = node.style.writing_mode;
    let boxed = resolve_box(&node.style, ctx);
    let inset = boxed.logical_inset(mode);
    let flow = resolve_flow_size(node, &boxed, constraints, ctx);
    let inline = flow.inline.unwrap_or_else(|| {
        let shrink = stack_children(node, UNBOUNDED, ctx);
        flow.inline_or_content(shrink.max_inline, inset.inline_sum())
    });
    let stack = stack_children(node, non_negative(inline - inset.inline_sum()), ctx);
    let block = flow.block_or_content(inline, stack.extent, inset.block_sum());
    let content_block = non_negative(block - inset.block_sum());
    let size = constraints.constrain(LogicalSize::new(inline, block).to_physical(mode));
    debug!(
        target: "css::core::block",
        "[BLOCK] children={} inline={inline:.3} block={block:.3} extent={:.3}",
        stack.frames.len(),
        stack.extent
    );
    Fragment {
        size,
        baseline: stack.baseline.map(|baseline| baseline + inset.block_start),
        children: stack
            .frames
            .into_iter()
            .map(|(index, rect)| physical_frame(index, rect, mode, content_block))
            .collect(),
        text_layout: None,
    }
}

/// Measure and stack the in-flow children inside `available_inline`.
///
/// Children declaring an inline length get unbounded room, so they keep it
/// even when it overflows.
fn stack_children(node: &Node, available_inline: f32, ctx: &LayoutContext<'_>) -> Stack {
    let mode = node.style.writing_mode;
    let mut stack = Stack::default();
    let mut cursor = 0.0f32;
    let mut previous_end = None;
    for (index, child) in node.children.iter().enumerate() {
        if !child.is_in_flow() {
            continue;
        }
        let margins = resolve_box(&child.style, ctx).logical_margins(mode);
        let inline_dimension = if mode.is_vertical() {
            child.style.height
        } else {
            child.style.width
        };
        let inline_max = if matches!(inline_dimension, Dimension::Length(_)) {
            UNBOUNDED
        } else {
            non_negative(available_inline - margins.inline_sum())
        };
        let measured = measure(
            child,
            flow_constraints(mode, (0.0, inline_max), (0.0, UNBOUNDED)),
            ctx,
        );
        let size = LogicalSize::from_physical(measured.size, mode);
        let block_start = cursor + collapsed_gap(previous_end, margins.block_start);
        if stack.baseline.is_none() && !mode.is_vertical() {
            stack.baseline = measured.baseline.map(|baseline| block_start + baseline);
        }
        stack.frames.push((
            index,
            LogicalRect {
                inline_start: margins.inline_start,
                block_start,
                inline_size: size.inline,
                block_size: size.block,
            },
        ));
        stack.max_inline = stack
            .max_inline
            .max(margins.inline_sum() + size.inline);
        cursor = block_start + size.block;
        previous_end = Some(margins.block_end);
    }
    stack.extent = non_negative(cursor + previous_end.unwrap_or(0.0));
    stack
}
