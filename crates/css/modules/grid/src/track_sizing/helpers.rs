//! Helper functions for track sizing.

use super::TrackContribution;

/// Per-track `(min_content, max_content)` contributions.
///
/// An item spanning several tracks contributes `(size − interior gaps) / span`
/// to each of them; a track takes the largest contribution it receives.
pub fn per_track_contributions(
    track_count: usize,
    contributions: &[TrackContribution],
    gap: f32,
) -> Vec<(f32, f32)> {
    let mut per_track = vec![(0.0f32, 0.0f32); track_count];
    for contribution in contributions {
        let span = contribution.span.max(1);
        let interior_gaps = gap * (span - 1) as f32;
        let share = |size: f32| ((size - interior_gaps) / span as f32).max(0.0);
        let min_share = share(contribution.min_content);
        let max_share = share(contribution.max_content).max(min_share);
        for slot in per_track.iter_mut().skip(contribution.start).take(span) {
            slot.0 = slot.0.max(min_share);
            slot.1 = slot.1.max(max_share);
        }
    }
    per_track
}

/// Number of gutters between tracks that are not collapsed.
pub fn gutter_count(collapsed: &[bool]) -> usize {
    collapsed
        .iter()
        .filter(|is_collapsed| !**is_collapsed)
        .count()
        .saturating_sub(1)
}
