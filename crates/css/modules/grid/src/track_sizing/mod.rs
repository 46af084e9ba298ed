//! Grid track sizing algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#algo-track-sizing>

mod distribution;
mod expansion;
mod helpers;
mod resolution;

use tracing::debug;

use crate::types::{GridTrack, GridTrackSize, TrackRepeat};

pub use expansion::{
    add_implicit_tracks_for_placements, auto_repeat_count, collapse_auto_fit_tracks,
    expand_auto_repeat_tracks,
};
pub use helpers::gutter_count;

/// Axis identifier (row or column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Rows, stacked along the block axis
    Row,
    /// Columns, laid out along the inline axis
    Column,
}

/// Track list of one axis as declared on the container.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxisTracks {
    /// Explicit track definitions (`grid-template-rows`/`-columns`)
    pub tracks: Vec<GridTrackSize>,
    /// Gap between tracks
    pub gap: f32,
    /// Optional repeat pattern placed after the explicit tracks
    pub auto_repeat: Option<TrackRepeat>,
    /// Size of implicit tracks (`grid-auto-rows`/`-columns`)
    pub auto_size: GridTrackSize,
}

impl Default for GridAxisTracks {
    fn default() -> Self {
        Self::new(Vec::new(), 0.0)
    }
}

impl GridAxisTracks {
    /// Create a new axis tracks definition.
    pub const fn new(tracks: Vec<GridTrackSize>, gap: f32) -> Self {
        Self {
            tracks,
            gap,
            auto_repeat: None,
            auto_size: GridTrackSize::auto(),
        }
    }

    /// Create a new axis tracks definition with a repeat pattern.
    pub const fn with_auto_repeat(
        tracks: Vec<GridTrackSize>,
        gap: f32,
        auto_repeat: TrackRepeat,
    ) -> Self {
        Self {
            tracks,
            gap,
            auto_repeat: Some(auto_repeat),
            auto_size: GridTrackSize::auto(),
        }
    }

    /// Replace the implicit track size.
    #[must_use]
    pub const fn with_auto_size(mut self, auto_size: GridTrackSize) -> Self {
        self.auto_size = auto_size;
        self
    }

    pub const fn is_auto_fit(&self) -> bool {
        matches!(self.auto_repeat, Some(TrackRepeat::AutoFit(_)))
    }
}

/// Content contribution of one item to the tracks it spans along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackContribution {
    /// Index of the first spanned track
    pub start: usize,
    /// Number of spanned tracks
    pub span: usize,
    /// Min-content contribution, margins included
    pub min_content: f32,
    /// Max-content contribution, margins included
    pub max_content: f32,
}

/// Track sizes and positions along one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTracks {
    /// Final size of each track
    pub sizes: Vec<f32>,
    /// Start offset of each track from the content edge
    pub offsets: Vec<f32>,
    /// Offset just past the last track
    pub end: f32,
}

impl ResolvedTracks {
    /// Lay tracks out from `start`, inserting `gap + between` before every
    /// track that follows a visible one. Collapsed tracks get no gutter.
    pub fn position(
        sizes: Vec<f32>,
        collapsed: &[bool],
        gap: f32,
        start: f32,
        between: f32,
    ) -> Self {
        let mut offsets = Vec::with_capacity(sizes.len());
        let mut cursor = start;
        let mut seen_visible = false;
        for (index, size) in sizes.iter().enumerate() {
            let is_collapsed = collapsed.get(index).copied().unwrap_or(false);
            if !is_collapsed && seen_visible {
                cursor += gap + between;
            }
            offsets.push(cursor);
            cursor += size;
            seen_visible |= !is_collapsed;
        }
        Self {
            sizes,
            offsets,
            end: cursor,
        }
    }

    /// Offset and size of the area covering `span` tracks from `start`,
    /// including the gutters between them.
    pub fn span_extent(&self, start: usize, span: usize) -> (f32, f32) {
        let Some(offset) = self.offsets.get(start).copied() else {
            return (self.end, 0.0);
        };
        let last = (start + span.max(1) - 1).min(self.offsets.len() - 1);
        let end = self.offsets.get(last).copied().unwrap_or(offset)
            + self.sizes.get(last).copied().unwrap_or(0.0);
        (offset, (end - offset).max(0.0))
    }
}

/// Size every track of an axis.
///
/// Spec: §12.3 Track Sizing Algorithm
///
/// `available` may be `f32::INFINITY`; percentages then behave as `auto`,
/// non-flexible tracks grow to their limits and `fr` tracks take their
/// content-based flex fraction. Fixed tracks never shrink below their size.
pub fn size_tracks(
    tracks: &[GridTrack],
    available: f32,
    gap: f32,
    contributions: &[TrackContribution],
    axis: GridAxis,
) -> Vec<f32> {
    let collapsed: Vec<bool> = tracks.iter().map(|track| track.collapsed).collect();
    let gaps_total = gap * gutter_count(&collapsed) as f32;
    let space = available - gaps_total;
    let per_track = helpers::per_track_contributions(tracks.len(), contributions, gap);
    let mut states = resolution::initialize_tracks(tracks, space, &per_track);

    let base_total: f32 = states.iter().map(|state| state.base).sum();
    distribution::maximize_tracks(&mut states, space - base_total);

    if states.iter().any(|state| state.flex > 0.0) {
        let fr_size = if space.is_finite() {
            let inflexible: f32 = states
                .iter()
                .filter(|state| state.flex <= 0.0)
                .map(|state| state.base)
                .sum();
            distribution::find_fr_size(&states, space - inflexible)
        } else {
            distribution::flex_fraction_from_content(&states, &per_track)
        };
        distribution::expand_flexible_tracks(&mut states, fr_size);
        debug!(target: "css::grid::tracks", "[GRID-TRACKS] axis={axis:?} fr_size={fr_size:.3}");
    }

    let sizes: Vec<f32> = states.iter().map(|state| state.base).collect();
    debug!(
        target: "css::grid::tracks",
        "[GRID-TRACKS] axis={axis:?} available={available:.3} gaps={gaps_total:.3} sizes={sizes:?}"
    );
    sizes
}
