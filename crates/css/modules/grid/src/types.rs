//! Grid container and item type definitions.
//!
//! Spec: CSS Grid Layout Module Level 2
//! <https://www.w3.org/TR/css-grid-2/>

use crate::alignment::GridAlignment;

/// Represents a track size in the grid.
///
/// Spec: §7.2.1 Track Sizing Functions
/// <https://www.w3.org/TR/css-grid-2/#track-sizing>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackBreadth {
    /// Length in pixels
    Length(f32),
    /// Fraction of the available size (0.5 = 50%)
    Percentage(f32),
    /// Flex factor (fr units)
    Flex(f32),
    /// Minimum content size
    MinContent,
    /// Maximum content size
    MaxContent,
    /// Automatic sizing
    Auto,
}

impl TrackBreadth {
    /// Check if this breadth is intrinsic (depends on content).
    pub const fn is_intrinsic(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::Auto)
    }

    /// Check if this breadth is flexible (uses fr units).
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flex(_))
    }

    /// Get the flex factor, or 0.0 if not flexible.
    pub const fn flex_factor(self) -> f32 {
        match self {
            Self::Flex(factor) => factor,
            _ => 0.0,
        }
    }

    /// Resolve a fixed breadth against the available size. Intrinsic and
    /// flexible breadths, and percentages of an unbounded size, return `None`.
    pub fn fixed_size(self, available: f32) -> Option<f32> {
        match self {
            Self::Length(px) => Some(px.max(0.0)),
            Self::Percentage(ratio) if available.is_finite() => Some((ratio * available).max(0.0)),
            _ => None,
        }
    }
}

/// Track sizing function.
///
/// Spec: §7.2.1 Track Sizing Functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridTrackSize {
    /// Fixed size
    Breadth(TrackBreadth),
    /// minmax(min, max)
    MinMax(TrackBreadth, TrackBreadth),
    /// fit-content(limit), limit in pixels
    FitContent(f32),
}

impl Default for GridTrackSize {
    fn default() -> Self {
        Self::auto()
    }
}

impl GridTrackSize {
    /// A fixed pixel track.
    pub const fn fixed(px: f32) -> Self {
        Self::Breadth(TrackBreadth::Length(px))
    }

    /// A flexible `fr` track.
    pub const fn fr(factor: f32) -> Self {
        Self::Breadth(TrackBreadth::Flex(factor))
    }

    pub const fn auto() -> Self {
        Self::Breadth(TrackBreadth::Auto)
    }

    pub const fn percent(ratio: f32) -> Self {
        Self::Breadth(TrackBreadth::Percentage(ratio))
    }

    pub const fn min_content() -> Self {
        Self::Breadth(TrackBreadth::MinContent)
    }

    pub const fn max_content() -> Self {
        Self::Breadth(TrackBreadth::MaxContent)
    }

    pub const fn minmax(min: TrackBreadth, max: TrackBreadth) -> Self {
        Self::MinMax(min, max)
    }

    pub const fn fit_content(limit: f32) -> Self {
        Self::FitContent(limit)
    }

    /// Get the minimum breadth for this track size.
    ///
    /// A bare `fr` track has an automatic minimum.
    pub const fn min_breadth(self) -> TrackBreadth {
        match self {
            Self::Breadth(TrackBreadth::Flex(_)) | Self::FitContent(_) => TrackBreadth::Auto,
            Self::Breadth(breadth) | Self::MinMax(breadth, _) => breadth,
        }
    }

    /// Get the maximum breadth for this track size.
    pub const fn max_breadth(self) -> TrackBreadth {
        match self {
            Self::Breadth(breadth) | Self::MinMax(_, breadth) => breadth,
            Self::FitContent(limit) => TrackBreadth::Length(limit),
        }
    }

    /// Flex factor of the maximum breadth, 0 for inflexible tracks.
    pub const fn fraction(self) -> f32 {
        self.max_breadth().flex_factor()
    }

    pub const fn is_flexible(self) -> bool {
        self.max_breadth().is_flexible()
    }

    /// Size of one track when the available size is known, used to count
    /// auto repetitions: the fixed max breadth, else the fixed min breadth.
    pub fn repeat_size(self, available: f32) -> f32 {
        let min = self.min_breadth().fixed_size(available);
        let max = self.max_breadth().fixed_size(available);
        match (min, max) {
            (Some(min_px), Some(max_px)) => min_px.max(max_px),
            (Some(px), None) | (None, Some(px)) => px,
            (None, None) => 0.0,
        }
    }
}

/// Repeat pattern for track lists.
///
/// Spec: §7.2.3 Repeating Rows and Columns
#[derive(Debug, Clone, PartialEq)]
pub enum TrackRepeat {
    /// repeat(count, track-list)
    Count(usize, Vec<GridTrackSize>),
    /// repeat(auto-fill, track-list)
    AutoFill(Vec<GridTrackSize>),
    /// repeat(auto-fit, track-list)
    AutoFit(Vec<GridTrackSize>),
}

impl TrackRepeat {
    /// The repeated track list.
    pub fn tracks(&self) -> &[GridTrackSize] {
        match self {
            Self::Count(_, tracks) | Self::AutoFill(tracks) | Self::AutoFit(tracks) => tracks,
        }
    }
}

/// Where a track came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackListType {
    /// Explicit tracks from grid-template-*
    Explicit,
    /// Tracks produced by an auto-fill/auto-fit repetition
    Repeated,
    /// Implicit tracks from grid-auto-*
    Implicit,
}

/// A track in the grid with its sizing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTrack {
    /// Track sizing function
    pub size: GridTrackSize,
    /// Track type
    pub track_type: TrackListType,
    /// Empty auto-fit track, sized to zero with no gutters.
    pub collapsed: bool,
}

impl GridTrack {
    pub const fn new(size: GridTrackSize, track_type: TrackListType) -> Self {
        Self {
            size,
            track_type,
            collapsed: false,
        }
    }
}

/// Auto-placement algorithm direction.
///
/// Spec: §8.5 Grid Item Placement Algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAutoFlow {
    /// Place items row by row
    #[default]
    Row,
    /// Place items column by column
    Column,
    /// Pack items densely (try to fill holes)
    RowDense,
    /// Pack items densely in columns
    ColumnDense,
}

impl GridAutoFlow {
    pub const fn is_dense(self) -> bool {
        matches!(self, Self::RowDense | Self::ColumnDense)
    }

    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnDense)
    }
}

/// Represents a grid item with its style and content information.
///
/// Lines are 1-based; negative lines count back from the end of the explicit
/// grid and `0` is treated as auto. Sizes are in flow-relative terms: the
/// inline axis runs along columns, the block axis along rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem<NodeId = usize> {
    /// Node identifier (generic to support different node ID types)
    pub node_id: NodeId,
    /// Explicit row start line (if specified)
    pub row_start: Option<i32>,
    /// Explicit row end line (if specified)
    pub row_end: Option<i32>,
    /// Explicit column start line (if specified)
    pub col_start: Option<i32>,
    /// Explicit column end line (if specified)
    pub col_end: Option<i32>,
    /// `span N` for rows; used when the end line is absent.
    pub row_span: usize,
    /// `span N` for columns.
    pub col_span: usize,
    /// `grid-area` name looked up in the container's template areas.
    pub area: Option<String>,
    /// Minimum content inline size, margins included
    pub min_content_inline: f32,
    /// Maximum content inline size, margins included
    pub max_content_inline: f32,
    pub margin_inline_start: f32,
    pub margin_inline_end: f32,
    pub margin_block_start: f32,
    pub margin_block_end: f32,
    /// Declared inline size; such items are not stretched.
    pub inline_size: Option<f32>,
    /// Declared block size; such items are not stretched.
    pub block_size: Option<f32>,
    /// Preferred inline / block ratio.
    pub aspect_ratio: Option<f32>,
    /// `justify-self`
    pub justify_self: GridAlignment,
    /// `align-self`
    pub align_self: GridAlignment,
}

impl<NodeId> GridItem<NodeId> {
    /// Create a new auto-placed grid item with the given node ID.
    pub const fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            row_start: None,
            row_end: None,
            col_start: None,
            col_end: None,
            row_span: 1,
            col_span: 1,
            area: None,
            min_content_inline: 0.0,
            max_content_inline: 0.0,
            margin_inline_start: 0.0,
            margin_inline_end: 0.0,
            margin_block_start: 0.0,
            margin_block_end: 0.0,
            inline_size: None,
            block_size: None,
            aspect_ratio: None,
            justify_self: GridAlignment::Unset,
            align_self: GridAlignment::Unset,
        }
    }

    /// Check if this item has explicit row placement.
    pub const fn has_explicit_row_placement(&self) -> bool {
        self.row_start.is_some() || self.row_end.is_some()
    }

    /// Check if this item has explicit column placement.
    pub const fn has_explicit_col_placement(&self) -> bool {
        self.col_start.is_some() || self.col_end.is_some()
    }

    #[inline]
    pub fn inline_margins(&self) -> f32 {
        self.margin_inline_start + self.margin_inline_end
    }

    #[inline]
    pub fn block_margins(&self) -> f32 {
        self.margin_block_start + self.margin_block_end
    }
}
