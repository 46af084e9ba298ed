//! CSS Writing Modes Level 4 — block flow direction and logical ↔ physical mapping.
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/>
//!
//! Layout algorithms work in logical coordinates (inline axis, block axis) and
//! call [`logical_to_physical`] once when an item's rectangle is written.

use css_box::{Edges, Rect, Size};

/// `writing-mode`: block flow direction.
///
/// Spec: §3.1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    /// Lines run top-to-bottom, blocks stack right-to-left.
    VerticalRl,
    /// Lines run top-to-bottom, blocks stack left-to-right.
    VerticalLr,
    /// Laid out as `vertical-rl`; glyphs are set sideways.
    SidewaysRl,
    /// Laid out as `vertical-lr`; glyphs are set sideways.
    SidewaysLr,
}

impl WritingMode {
    /// True when the inline axis is vertical.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        !matches!(self, Self::HorizontalTb)
    }

    /// True when blocks stack from the right edge.
    #[inline]
    pub const fn is_block_right_to_left(self) -> bool {
        matches!(self, Self::VerticalRl | Self::SidewaysRl)
    }
}

/// A size expressed along the inline and block axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalSize {
    pub inline: f32,
    pub block: f32,
}

impl LogicalSize {
    #[inline]
    pub const fn new(inline: f32, block: f32) -> Self {
        Self { inline, block }
    }

    /// Read a physical size in the given writing mode.
    #[inline]
    pub const fn from_physical(size: Size, mode: WritingMode) -> Self {
        if mode.is_vertical() {
            Self {
                inline: size.height,
                block: size.width,
            }
        } else {
            Self {
                inline: size.width,
                block: size.height,
            }
        }
    }

    /// Convert back to width/height in the given writing mode.
    #[inline]
    pub const fn to_physical(self, mode: WritingMode) -> Size {
        if mode.is_vertical() {
            Size {
                width: self.block,
                height: self.inline,
            }
        } else {
            Size {
                width: self.inline,
                height: self.block,
            }
        }
    }
}

/// A rectangle expressed as offsets and extents along the inline and block axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalRect {
    pub inline_start: f32,
    pub block_start: f32,
    pub inline_size: f32,
    pub block_size: f32,
}

/// Edge widths (margin, padding, border) in flow-relative terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalEdges {
    pub inline_start: f32,
    pub inline_end: f32,
    pub block_start: f32,
    pub block_end: f32,
}

impl LogicalEdges {
    /// Read physical edges in the given writing mode.
    ///
    /// Spec: §6.2 Flow-relative Directions
    pub const fn from_physical(edges: Edges, mode: WritingMode) -> Self {
        match mode {
            WritingMode::HorizontalTb => Self {
                inline_start: edges.left,
                inline_end: edges.right,
                block_start: edges.top,
                block_end: edges.bottom,
            },
            WritingMode::VerticalLr | WritingMode::SidewaysLr => Self {
                inline_start: edges.top,
                inline_end: edges.bottom,
                block_start: edges.left,
                block_end: edges.right,
            },
            WritingMode::VerticalRl | WritingMode::SidewaysRl => Self {
                inline_start: edges.top,
                inline_end: edges.bottom,
                block_start: edges.right,
                block_end: edges.left,
            },
        }
    }

    #[inline]
    pub fn inline_sum(&self) -> f32 {
        self.inline_start + self.inline_end
    }

    #[inline]
    pub fn block_sum(&self) -> f32 {
        self.block_start + self.block_end
    }
}

/// Map a logical rectangle onto physical x/y/width/height.
///
/// `container_block_size` is the block-axis extent of the containing content
/// box; `vertical-rl` needs it because its block axis runs right to left.
///
/// Spec: §6.4 Abstract-to-Physical Mappings
pub fn logical_to_physical(
    rect: LogicalRect,
    mode: WritingMode,
    container_block_size: f32,
) -> Rect {
    match mode {
        WritingMode::HorizontalTb => Rect::new(
            rect.inline_start,
            rect.block_start,
            rect.inline_size,
            rect.block_size,
        ),
        WritingMode::VerticalLr | WritingMode::SidewaysLr => Rect::new(
            rect.block_start,
            rect.inline_start,
            rect.block_size,
            rect.inline_size,
        ),
        WritingMode::VerticalRl | WritingMode::SidewaysRl => Rect::new(
            container_block_size - (rect.block_start + rect.block_size),
            rect.inline_start,
            rect.block_size,
            rect.inline_size,
        ),
    }
}
