//! Initial base sizes and growth limits.
//!
//! Spec: §12.4 Initialize Track Sizes

use crate::types::{GridTrack, GridTrackSize, TrackBreadth};

/// Working state of one track during sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackState {
    pub base: f32,
    pub limit: f32,
    /// Flex factor of the max breadth; 0 for inflexible tracks.
    pub flex: f32,
    pub collapsed: bool,
}

/// Resolve a min breadth to a base size.
fn base_size(breadth: TrackBreadth, available: f32, contribution: (f32, f32)) -> f32 {
    if let Some(px) = breadth.fixed_size(available) {
        return px;
    }
    match breadth {
        TrackBreadth::MaxContent => contribution.1,
        // Automatic minimums and unresolvable percentages use min-content.
        _ => contribution.0,
    }
}

/// Resolve a max breadth to a growth limit.
fn growth_limit(breadth: TrackBreadth, available: f32, contribution: (f32, f32)) -> f32 {
    if let Some(px) = breadth.fixed_size(available) {
        return px;
    }
    match breadth {
        TrackBreadth::MinContent => contribution.0,
        _ => contribution.1,
    }
}

/// Base size and growth limit of each track from its sizing function and
/// the content contributions it received.
pub fn initialize_tracks(
    tracks: &[GridTrack],
    available: f32,
    contributions: &[(f32, f32)],
) -> Vec<TrackState> {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            if track.collapsed {
                return TrackState {
                    base: 0.0,
                    limit: 0.0,
                    flex: 0.0,
                    collapsed: true,
                };
            }
            let contribution = contributions.get(index).copied().unwrap_or((0.0, 0.0));
            let base = base_size(track.size.min_breadth(), available, contribution);
            let limit = match track.size {
                GridTrackSize::FitContent(limit) => contribution.1.min(limit),
                size => growth_limit(size.max_breadth(), available, contribution),
            };
            TrackState {
                base,
                limit: limit.max(base),
                flex: track.size.fraction(),
                collapsed: false,
            }
        })
        .collect()
}
