//! Track expansion logic for auto-repeat and implicit tracks.

use crate::placement::GridArea;
use crate::types::{GridTrack, GridTrackSize, TrackListType, TrackRepeat};

use super::{GridAxis, GridAxisTracks};

/// Number of auto repetitions that fit: `max(1, floor((space + gap) / (repetition + gap)))`.
///
/// Spec: §7.2.3.2 Repeat-to-fill: auto-fill and auto-fit repetitions
pub fn auto_repeat_count(repeat_tracks: &[GridTrackSize], available: f32, gap: f32) -> usize {
    if repeat_tracks.is_empty() {
        return 0;
    }
    if !available.is_finite() {
        return 1;
    }
    let repetition: f32 = repeat_tracks
        .iter()
        .map(|track| track.repeat_size(available))
        .sum::<f32>()
        + gap * (repeat_tracks.len() - 1) as f32;
    if repetition <= 0.0 {
        return 1;
    }
    (((available.max(0.0) + gap) / (repetition + gap)).floor() as usize).max(1)
}

/// Explicit tracks followed by the expanded repeat pattern.
///
/// Space taken by the explicit tracks (and one gutter each) is not available
/// to the auto repetitions.
pub fn expand_auto_repeat_tracks(axis_tracks: &GridAxisTracks, available: f32) -> Vec<GridTrack> {
    let mut expanded: Vec<GridTrack> = axis_tracks
        .tracks
        .iter()
        .map(|size| GridTrack::new(*size, TrackListType::Explicit))
        .collect();
    let Some(repeat) = &axis_tracks.auto_repeat else {
        return expanded;
    };
    let (count, track_type) = match repeat {
        TrackRepeat::Count(count, _) => (*count, TrackListType::Explicit),
        TrackRepeat::AutoFill(tracks) | TrackRepeat::AutoFit(tracks) => {
            let used: f32 = axis_tracks
                .tracks
                .iter()
                .map(|track| track.repeat_size(available) + axis_tracks.gap)
                .sum();
            let remaining = (available - used).max(0.0);
            (
                auto_repeat_count(tracks, remaining, axis_tracks.gap),
                TrackListType::Repeated,
            )
        }
    };
    for _ in 0..count {
        expanded.extend(
            repeat
                .tracks()
                .iter()
                .map(|size| GridTrack::new(*size, track_type)),
        );
    }
    expanded
}

/// Add implicit tracks (sized by `grid-auto-rows`/`grid-auto-columns`) until
/// every placed item's span lies within the track list.
pub fn add_implicit_tracks_for_placements(
    mut tracks: Vec<GridTrack>,
    placements: &[GridArea],
    axis: GridAxis,
    auto_size: GridTrackSize,
) -> Vec<GridTrack> {
    let needed = placements
        .iter()
        .map(|area| match axis {
            GridAxis::Row => area.row_end,
            GridAxis::Column => area.col_end,
        })
        .max()
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1);
    while tracks.len() < needed {
        tracks.push(GridTrack::new(auto_size, TrackListType::Implicit));
    }
    tracks
}

/// Check if a track has any items placed in or spanning across it.
fn track_has_items(track_idx: usize, placements: &[GridArea], axis: GridAxis) -> bool {
    let track_line = track_idx + 1;
    placements.iter().any(|area| match axis {
        GridAxis::Row => area.row_start <= track_line && area.row_end > track_line,
        GridAxis::Column => area.col_start <= track_line && area.col_end > track_line,
    })
}

/// Collapse empty auto-fit tracks.
///
/// Spec: §7.2.3.2 - The auto-fit keyword collapses empty repeated tracks.
/// Collapsed tracks keep their index so line numbers stay stable.
pub fn collapse_auto_fit_tracks(
    tracks: &mut [GridTrack],
    placements: &[GridArea],
    axis: GridAxis,
    is_auto_fit: bool,
) {
    if !is_auto_fit {
        return;
    }
    for (index, track) in tracks.iter_mut().enumerate() {
        if track.track_type == TrackListType::Repeated
            && !track_has_items(index, placements, axis)
        {
            track.collapsed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackBreadth;

    /// # Panics
    /// Panics if the repeat count formula is not applied.
    #[test]
    fn auto_repeat_count_formula() {
        let pattern = [GridTrackSize::fixed(100.0)];
        assert_eq!(auto_repeat_count(&pattern, 420.0, 10.0), 3);
        assert_eq!(auto_repeat_count(&pattern, 440.0, 10.0), 4);
        assert_eq!(auto_repeat_count(&pattern, 50.0, 10.0), 1);
        assert_eq!(auto_repeat_count(&pattern, f32::INFINITY, 10.0), 1);
    }

    /// # Panics
    /// Panics if explicit tracks do not reduce the space for repetitions.
    #[test]
    fn expansion_keeps_explicit_tracks_first() {
        let axis = GridAxisTracks::with_auto_repeat(
            vec![GridTrackSize::fixed(90.0)],
            10.0,
            TrackRepeat::AutoFill(vec![GridTrackSize::minmax(
                TrackBreadth::Length(100.0),
                TrackBreadth::Flex(1.0),
            )]),
        );
        let tracks = expand_auto_repeat_tracks(&axis, 420.0);
        assert_eq!(tracks.len(), 4);
        assert_eq!(tracks.first().map(|track| track.track_type), Some(TrackListType::Explicit));
        assert!(tracks.iter().skip(1).all(|track| track.track_type == TrackListType::Repeated));
    }

    /// # Panics
    /// Panics if a counted repeat is not expanded as explicit tracks.
    #[test]
    fn counted_repeat_expands() {
        let axis = GridAxisTracks::with_auto_repeat(
            Vec::new(),
            0.0,
            TrackRepeat::Count(3, vec![GridTrackSize::fr(1.0), GridTrackSize::fixed(10.0)]),
        );
        let tracks = expand_auto_repeat_tracks(&axis, 100.0);
        assert_eq!(tracks.len(), 6);
        assert!(tracks.iter().all(|track| track.track_type == TrackListType::Explicit));
    }

    /// # Panics
    /// Panics if implicit tracks are not added for out-of-range placements.
    #[test]
    fn implicit_tracks_cover_placements() {
        let tracks = vec![GridTrack::new(GridTrackSize::fixed(10.0), TrackListType::Explicit)];
        let placements = [GridArea::new(3, 5, 1, 2)];
        let extended = add_implicit_tracks_for_placements(
            tracks,
            &placements,
            GridAxis::Row,
            GridTrackSize::fixed(20.0),
        );
        assert_eq!(extended.len(), 4);
        assert_eq!(
            extended.last().map(|track| (track.size, track.track_type)),
            Some((GridTrackSize::fixed(20.0), TrackListType::Implicit))
        );
    }

    /// # Panics
    /// Panics if occupied or explicit tracks are collapsed.
    #[test]
    fn auto_fit_collapses_only_empty_repeated_tracks() {
        let mut tracks = vec![
            GridTrack::new(GridTrackSize::fixed(50.0), TrackListType::Explicit),
            GridTrack::new(GridTrackSize::fixed(50.0), TrackListType::Repeated),
            GridTrack::new(GridTrackSize::fixed(50.0), TrackListType::Repeated),
        ];
        let placements = [GridArea::new(1, 2, 2, 3)];
        collapse_auto_fit_tracks(&mut tracks, &placements, GridAxis::Column, true);
        let collapsed: Vec<bool> = tracks.iter().map(|track| track.collapsed).collect();
        assert_eq!(collapsed, vec![false, false, true]);
    }
}
