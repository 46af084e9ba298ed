//! CSS Grid Layout Module Level 2
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! Two-dimensional layout over item records: placement, track sizing,
//! content distribution and item alignment. Callers supply per-item content
//! sizes and a [`GridMeasure`] that lays an item out at a given inline size.

// Grid container and item types
mod types;
pub use types::{
    GridAutoFlow, GridItem, GridTrack, GridTrackSize, TrackBreadth, TrackListType, TrackRepeat,
};

// Box alignment
mod alignment;
pub use alignment::{ContentDistribution, GridAlignment, align_in_area, distribute_content};

// grid-template-areas
mod areas;
pub use areas::{GridTemplateAreas, NamedArea};

// Track sizing algorithm
mod track_sizing;
pub use track_sizing::{
    GridAxis, GridAxisTracks, ResolvedTracks, TrackContribution, auto_repeat_count, size_tracks,
};

// Grid placement algorithm
mod placement;
pub use placement::{ExplicitGrid, GridArea, MAX_GRID_LINE, place_grid_items};

// Grid layout algorithm
mod layout;
pub use layout::{
    GridContainerInputs, GridLayoutResult, GridMeasure, GridMeasured, GridPlacedItem, layout_grid,
};
