//! Spec: CSS 2.2 §8.3.1 Collapsing margins
//!
//! Only adjoining sibling margins collapse here: a block container never
//! collapses its own margins with those of its first or last child.

/// Spec: §8.3.1 — Collapse two adjoining vertical margins.
///
/// The larger margin wins, whatever the signs.
#[inline]
pub const fn collapse_margins_pair(previous: f32, next: f32) -> f32 {
    previous.max(next)
}

/// Spec: §8.3.1 — Space between a block child and whatever precedes it.
///
/// `previous_end` is the block-end margin of the previous in-flow sibling, or
/// `None` for the first child, whose block-start margin is kept whole.
#[inline]
pub fn collapsed_gap(previous_end: Option<f32>, block_start: f32) -> f32 {
    previous_end.map_or(block_start, |previous| {
        collapse_margins_pair(previous, block_start)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if positive margins do not collapse to the larger one.
    #[test]
    fn positive_margins_take_max() {
        assert!((collapse_margins_pair(20.0, 30.0) - 30.0).abs() < 0.001);
        assert!((collapse_margins_pair(30.0, 20.0) - 30.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if negative or mixed margins do not collapse to the larger one.
    #[test]
    fn negative_and_mixed_margins_take_max() {
        assert!((collapse_margins_pair(-10.0, -25.0) + 10.0).abs() < 0.001);
        assert!((collapse_margins_pair(20.0, -10.0) - 20.0).abs() < 0.001);
        assert!((collapse_margins_pair(-15.0, 40.0) - 40.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if the first child's margin is collapsed with nothing.
    #[test]
    fn first_child_keeps_its_margin() {
        assert!((collapsed_gap(None, 12.0) - 12.0).abs() < 0.001);
        assert!((collapsed_gap(None, -8.0) + 8.0).abs() < 0.001);
        assert!((collapsed_gap(Some(20.0), 12.0) - 20.0).abs() < 0.001);
    }
}
