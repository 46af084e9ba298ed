//! Free space distribution: maximizing tracks and expanding flexible tracks.
//!
//! Spec: §12.6 Maximize Tracks, §12.7 Expand Flexible Tracks

use super::resolution::TrackState;

/// Grow inflexible tracks from their base size toward their growth limit.
///
/// With unbounded space every track reaches its limit; otherwise the free
/// space is shared equally, freezing tracks as they hit their limit.
pub fn maximize_tracks(states: &mut [TrackState], free_space: f32) {
    if !free_space.is_finite() {
        for state in states.iter_mut().filter(|state| state.flex <= 0.0) {
            state.base = state.limit;
        }
        return;
    }
    let mut remaining = free_space;
    while remaining > 0.001 {
        let growable: Vec<usize> = states
            .iter()
            .enumerate()
            .filter(|(_, state)| {
                state.flex <= 0.0 && !state.collapsed && state.limit - state.base > 0.001
            })
            .map(|(index, _)| index)
            .collect();
        if growable.is_empty() {
            break;
        }
        let share = remaining / growable.len() as f32;
        for index in growable {
            if let Some(state) = states.get_mut(index) {
                let grow = share.min(state.limit - state.base);
                state.base += grow;
                remaining -= grow;
            }
        }
    }
}

/// Size of one `fr` against a definite leftover space.
///
/// Tracks whose share would fall below their base size keep the base size
/// and drop out of the fraction, repeating until stable.
pub fn find_fr_size(states: &[TrackState], leftover: f32) -> f32 {
    let mut frozen = vec![false; states.len()];
    loop {
        let (factor_sum, frozen_space) = states
            .iter()
            .zip(&frozen)
            .filter(|(state, _)| state.flex > 0.0)
            .fold((0.0f32, 0.0f32), |(factors, space), (state, is_frozen)| {
                if *is_frozen {
                    (factors, space + state.base)
                } else {
                    (factors + state.flex, space)
                }
            });
        if factor_sum <= 0.0 {
            return 0.0;
        }
        // Flex factors summing below one only take that fraction of the space.
        let fr_size = (leftover - frozen_space).max(0.0) / factor_sum.max(1.0);
        let mut changed = false;
        for (state, is_frozen) in states.iter().zip(frozen.iter_mut()) {
            if state.flex > 0.0 && !*is_frozen && fr_size * state.flex < state.base {
                *is_frozen = true;
                changed = true;
            }
        }
        if !changed {
            return fr_size;
        }
    }
}

/// Flex fraction when the space is unbounded: the largest
/// `max(base, max-content) / factor` over flexible tracks.
pub fn flex_fraction_from_content(states: &[TrackState], contributions: &[(f32, f32)]) -> f32 {
    states
        .iter()
        .enumerate()
        .filter(|(_, state)| state.flex > 0.0)
        .map(|(index, state)| {
            let max_content = contributions.get(index).map_or(0.0, |contribution| contribution.1);
            state.base.max(max_content) / state.flex.max(1.0)
        })
        .fold(0.0f32, f32::max)
}

/// Apply an `fr` size to the flexible tracks, never going below the base size.
pub fn expand_flexible_tracks(states: &mut [TrackState], fr_size: f32) {
    for state in states.iter_mut().filter(|state| state.flex > 0.0) {
        state.base = state.base.max(fr_size * state.flex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(base: f32, limit: f32, flex: f32) -> TrackState {
        TrackState {
            base,
            limit,
            flex,
            collapsed: false,
        }
    }

    /// # Panics
    /// Panics if free space is not shared equally up to each limit.
    #[test]
    fn maximize_freezes_at_limit() {
        let mut states = vec![state(0.0, 10.0, 0.0), state(0.0, 100.0, 0.0)];
        maximize_tracks(&mut states, 60.0);
        assert!((states.first().map_or(0.0, |track| track.base) - 10.0).abs() < 0.001);
        assert!((states.get(1).map_or(0.0, |track| track.base) - 50.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if an fr track's minimum is not honored while the others share the rest.
    #[test]
    fn fr_size_respects_minimums() {
        let states = vec![state(150.0, 150.0, 1.0), state(0.0, 0.0, 1.0), state(0.0, 0.0, 2.0)];
        let fr = find_fr_size(&states, 300.0);
        assert!((fr - 50.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if the unbounded flex fraction ignores content.
    #[test]
    fn unbounded_fraction_uses_content() {
        let mut states = vec![state(0.0, 0.0, 1.0), state(0.0, 0.0, 2.0)];
        let fraction = flex_fraction_from_content(&states, &[(0.0, 30.0), (0.0, 40.0)]);
        assert!((fraction - 30.0).abs() < 0.001);
        expand_flexible_tracks(&mut states, fraction);
        assert!((states.get(1).map_or(0.0, |track| track.base) - 60.0).abs() < 0.001);
    }
}
