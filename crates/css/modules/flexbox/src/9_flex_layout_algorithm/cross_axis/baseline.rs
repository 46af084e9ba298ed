//! Baseline alignment within a flex line.
//!
//! Spec: §8.3 — <https://www.w3.org/TR/css-flexbox-1/#baseline-participation>

use super::super::{FlexChild, ItemState};
use crate::chapter8::AlignItems;

/// Largest extents above and below the shared baseline of a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaselineMetrics {
    /// Max of `margin_cross_start + baseline`.
    pub above: f32,
    /// Max of the outer cross size below the baseline.
    pub below: f32,
}

/// Metrics over the baseline-aligned items of a line, or `None` if there are none.
///
/// Items without a baseline synthesize one at their cross-end border edge.
pub(in super::super) fn line_baseline_metrics(
    items: &[FlexChild],
    line_items: &[usize],
    states: &[ItemState],
) -> Option<BaselineMetrics> {
    let mut metrics: Option<BaselineMetrics> = None;
    for &index in line_items {
        let (Some(child), Some(state)) = (items.get(index), states.get(index)) else {
            continue;
        };
        if state.align != AlignItems::Baseline {
            continue;
        }
        let baseline = state.baseline.unwrap_or(state.cross_size);
        let above = child.margin_cross_start + baseline;
        let below = state.cross_size - baseline + child.margin_cross_end;
        let current = metrics.get_or_insert_with(BaselineMetrics::default);
        current.above = current.above.max(above);
        current.below = current.below.max(below);
    }
    metrics
}
