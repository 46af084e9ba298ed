//! Cross sizes of lines and cross-axis alignment of items.
//!
//! Spec: §9.4 Cross Size Determination, §8.3 align-items/align-self

mod alignment;
mod baseline;

use log::debug;

use super::{FlexChild, FlexLine, ItemState};
use crate::chapter8::AlignItems;

pub use baseline::BaselineMetrics;

use alignment::{cross_offset_in_line, stretched_cross_size};
use baseline::line_baseline_metrics;

/// Cross size of one line: the largest outer cross size, or the baseline
/// group's ascent + descent when that is larger.
///
/// Spec: §9.4 step 8
pub(super) fn line_cross_size(
    items: &[FlexChild],
    line_items: &[usize],
    states: &[ItemState],
) -> f32 {
    let mut max_outer = 0.0f32;
    for &index in line_items {
        let (Some(child), Some(state)) = (items.get(index), states.get(index)) else {
            continue;
        };
        if state.align != AlignItems::Baseline {
            max_outer = max_outer.max(state.cross_size + child.cross_margins());
        }
    }
    let baseline_extent = line_baseline_metrics(items, line_items, states)
        .map_or(0.0, |metrics| metrics.above + metrics.below);
    max_outer.max(baseline_extent)
}

/// Position every item of a line on the cross axis, stretching where allowed.
///
/// Spec: §9.4 step 11 (stretch) and §8.3 (align-self)
pub(super) fn align_line_items(items: &[FlexChild], line: &FlexLine, states: &mut [ItemState]) {
    let baseline = line_baseline_metrics(items, &line.items, states);
    for &index in &line.items {
        let (Some(child), Some(state)) = (items.get(index), states.get_mut(index)) else {
            continue;
        };
        if state.align == AlignItems::Stretch && !child.has_definite_cross {
            state.cross_size = stretched_cross_size(child, line.cross_size);
            state.stretched = true;
        }
        let within = match (state.align, baseline) {
            (AlignItems::Baseline, Some(metrics)) => {
                metrics.above - state.baseline.unwrap_or(state.cross_size)
            }
            (align, _) => cross_offset_in_line(align, line.cross_size, state.cross_size, child),
        };
        state.cross_offset = line.cross_offset + within;
    }
    debug!(
        target: "css::flexbox::cross",
        "[FLEX-CROSS] line offset={:.3} size={:.3} items={}",
        line.cross_offset,
        line.cross_size,
        line.items.len()
    );
}

/// Baseline of a line, measured from the container's cross-start content edge.
///
/// Uses the first baseline-aligned item, else the first item reporting a baseline.
pub(super) fn line_first_baseline(line_items: &[usize], states: &[ItemState]) -> Option<f32> {
    let participating = line_items
        .iter()
        .filter_map(|index| states.get(*index))
        .find(|state| state.align == AlignItems::Baseline)
        .map(|state| state.cross_offset + state.baseline.unwrap_or(state.cross_size));
    participating.or_else(|| {
        line_items
            .iter()
            .filter_map(|index| states.get(*index))
            .find_map(|state| state.baseline.map(|baseline| state.cross_offset + baseline))
    })
}
