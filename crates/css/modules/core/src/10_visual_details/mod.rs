//! CSS 2.2 Chapter 10 — Visual formatting model details
//!
//! Used widths and heights. Along each flow axis a box's border-box size is
//! either known before its content is laid out or taken from the content
//! afterwards; [`FlowSize`] carries the first and finishes with the second.

pub mod aspect_ratio;
pub mod part_10_1_containing_block;
pub mod part_10_3_3_block_widths;
pub mod part_10_6_3_height_of_blocks;

use css_box::Constraints;

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::{AxisLimits, ResolvedBox};

pub use aspect_ratio::{apply_aspect_ratio, logical_ratio};
pub use part_10_1_containing_block::{padding_box, viewport_box};
pub use part_10_3_3_block_widths::{UsedAxis, used_width};
pub use part_10_6_3_height_of_blocks::used_height;

/// Border-box size of a box along its own flow axes, as far as it is known
/// before the content is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowSize {
    pub inline: Option<f32>,
    pub block: Option<f32>,
    /// Preferred inline / block ratio.
    pub ratio: Option<f32>,
    pub inline_limits: AxisLimits,
    pub block_limits: AxisLimits,
}

impl FlowSize {
    /// Border-box inline size, falling back to the content's extent.
    pub fn inline_or_content(&self, content_inline: f32, inset: f32) -> f32 {
        self.inline
            .unwrap_or_else(|| self.inline_limits.clamp(content_inline + inset))
    }

    /// Border-box block size for the final inline size, falling back to the
    /// ratio and then to the content's extent.
    pub fn block_or_content(&self, inline: f32, content_block: f32, inset: f32) -> f32 {
        if let Some(block) = self.block {
            return block;
        }
        let from_content = self
            .ratio
            .map_or(content_block + inset, |ratio| inline / ratio);
        self.block_limits.clamp(from_content)
    }
}

/// Resolve what can be known of a box's size from its style and constraints.
pub fn resolve_flow_size(
    node: &Node,
    boxed: &ResolvedBox,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
) -> FlowSize {
    let mode = node.style.writing_mode;
    let width = used_width(node, boxed, constraints, ctx);
    let height = used_height(node, boxed, constraints);
    let (inline, block, available_block) = if mode.is_vertical() {
        (height, width, constraints.max_width)
    } else {
        (width, height, constraints.max_height)
    };
    let ratio = logical_ratio(node.style.aspect_ratio, mode);
    let inline_limits = boxed.inline_limits(mode);
    let block_limits = boxed.block_limits(mode);
    let (inline_size, block_size) = ratio.map_or_else(
        || {
            (
                inline.settle(inline_limits),
                block.settle(block_limits),
            )
        },
        |ratio| {
            apply_aspect_ratio(
                (inline, inline_limits),
                (block, block_limits),
                ratio,
                available_block,
            )
        },
    );
    FlowSize {
        inline: inline_size,
        block: block_size,
        ratio,
        inline_limits,
        block_limits,
    }
}
