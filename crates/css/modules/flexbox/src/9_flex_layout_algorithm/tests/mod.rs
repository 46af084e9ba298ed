//! Tests for the flex layout algorithm.

use super::*;

mod cross_axis_tests;

/// A 0-grow, 1-shrink item with no margins.
#[inline]
pub fn item(handle: u64, basis: f32, cross: f32) -> FlexChild {
    FlexChild::fixed(ItemRef(handle), basis, cross)
}

/// A single-line row container with a definite main size.
#[inline]
pub fn row(main: f32) -> FlexContainerInputs {
    FlexContainerInputs {
        main_size: Some(main),
        main_limit: main,
        ..FlexContainerInputs::default()
    }
}

/// Lay out keeping every item's measured cross size.
#[inline]
pub fn run(container: &FlexContainerInputs, items: &[FlexChild]) -> FlexLayoutOutput {
    layout_flex(container, items, &mut KeepMeasuredCross(items))
}

/// Main offsets of every placement, in input order.
#[inline]
pub fn main_offsets(output: &FlexLayoutOutput) -> Vec<f32> {
    output
        .placements
        .iter()
        .map(|placement| placement.main_offset)
        .collect()
}

#[inline]
pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}

/// Compare two float slices element-wise.
#[inline]
pub fn all_approx(actual: &[f32], expected: &[f32]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(lhs, rhs)| approx(*lhs, *rhs))
}
