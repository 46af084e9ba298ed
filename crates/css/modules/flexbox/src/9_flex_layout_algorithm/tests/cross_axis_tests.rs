//! Cross-axis alignment, stretch, baselines and re-measurement.

use super::*;

fn cross_offsets(output: &FlexLayoutOutput) -> Vec<f32> {
    output
        .placements
        .iter()
        .map(|placement| placement.cross_offset)
        .collect()
}

fn row_with_cross(main: f32, cross: f32, align: AlignItems) -> FlexContainerInputs {
    FlexContainerInputs {
        cross_size: Some(cross),
        align_items: align,
        ..row(main)
    }
}

#[test]
/// Items without a definite cross size stretch to the line, minus margins.
///
/// # Panics
/// Panics if the stretched size or offset is wrong.
fn stretch_fills_line() {
    let mut child = item(1, 50.0, 20.0);
    child.margin_cross_start = 10.0;
    child.margin_cross_end = 10.0;
    let output = run(&row_with_cross(200.0, 100.0, AlignItems::Unset), &[child]);
    assert!(output.placements.first().is_some_and(|placement| {
        placement.stretched
            && approx(placement.cross_size, 80.0)
            && approx(placement.cross_offset, 10.0)
    }));
}

#[test]
/// Stretch is clamped by max cross size and skipped for definite cross sizes.
///
/// # Panics
/// Panics if stretch ignores max-size or a definite size.
fn stretch_respects_limits() {
    let mut capped = item(1, 50.0, 20.0);
    capped.max_cross = 60.0;
    let mut definite = item(2, 50.0, 20.0);
    definite.has_definite_cross = true;
    let output = run(&row_with_cross(200.0, 100.0, AlignItems::Stretch), &[capped, definite]);
    let crosses: Vec<f32> = output
        .placements
        .iter()
        .map(|placement| placement.cross_size)
        .collect();
    assert!(all_approx(&crosses, &[60.0, 20.0]));
    assert!(output.placements.get(1).is_some_and(|placement| !placement.stretched));
}

#[test]
/// Start, center and end place items within the line.
///
/// # Panics
/// Panics if any offset is wrong.
fn align_items_positions() {
    let items = [item(1, 50.0, 20.0)];
    let center = run(&row_with_cross(200.0, 100.0, AlignItems::Center), &items);
    assert!(all_approx(&cross_offsets(&center), &[40.0]));
    let end = run(&row_with_cross(200.0, 100.0, AlignItems::End), &items);
    assert!(all_approx(&cross_offsets(&end), &[80.0]));
    let start = run(&row_with_cross(200.0, 100.0, AlignItems::Start), &items);
    assert!(all_approx(&cross_offsets(&start), &[0.0]));
}

#[test]
/// align-self overrides the container's align-items.
///
/// # Panics
/// Panics if align-self is ignored.
fn align_self_overrides_container() {
    let mut child = item(1, 50.0, 20.0);
    child.align_self = AlignItems::End;
    let output = run(&row_with_cross(200.0, 100.0, AlignItems::Start), &[child]);
    assert!(all_approx(&cross_offsets(&output), &[80.0]));
}

fn baseline_items() -> [FlexChild; 3] {
    let mut items = [item(1, 50.0, 40.0), item(2, 50.0, 40.0), item(3, 50.0, 40.0)];
    for (child, baseline) in items.iter_mut().zip([20.0, 30.0, 25.0]) {
        child.baseline = Some(baseline);
    }
    items
}

#[test]
/// Baselines 20/30/25 line up at 30, giving offsets 10/0/5.
///
/// # Panics
/// Panics if baseline offsets or the container baseline are wrong.
fn baseline_alignment_offsets() {
    let container = FlexContainerInputs {
        align_items: AlignItems::Baseline,
        ..row(300.0)
    };
    let output = run(&container, &baseline_items());
    assert!(all_approx(&cross_offsets(&output), &[10.0, 0.0, 5.0]));
    let line_cross = output.lines.first().map_or(0.0, |line| line.cross_size);
    assert!(approx(line_cross, 50.0));
    assert!(output.first_baseline.is_some_and(|baseline| approx(baseline, 30.0)));
}

#[test]
/// Items without a baseline synthesize one from their cross size.
///
/// # Panics
/// Panics if the synthesized baseline is not used.
fn baseline_synthesized_from_cross_size() {
    let mut with_baseline = item(1, 50.0, 40.0);
    with_baseline.baseline = Some(10.0);
    let without = item(2, 50.0, 20.0);
    let container = FlexContainerInputs {
        align_items: AlignItems::Baseline,
        ..row(300.0)
    };
    let output = run(&container, &[with_baseline, without]);
    assert!(all_approx(&cross_offsets(&output), &[10.0, 0.0]));
}

#[test]
/// When baselines do not apply, baseline alignment falls back to start.
///
/// # Panics
/// Panics if items are still baseline-aligned.
fn baseline_falls_back_to_start() {
    let container = FlexContainerInputs {
        align_items: AlignItems::Baseline,
        baselines_apply: false,
        ..row(300.0)
    };
    let output = run(&container, &baseline_items());
    assert!(all_approx(&cross_offsets(&output), &[0.0, 0.0, 0.0]));
}

#[test]
/// Cross sizes are re-measured at the final main size.
///
/// # Panics
/// Panics if the re-measured cross size is not used.
fn cross_is_remeasured_after_flexing() {
    let mut first = item(1, 0.0, 0.0);
    first.flex_grow = 1.0;
    let mut second = item(2, 0.0, 0.0);
    second.flex_grow = 3.0;
    let container = FlexContainerInputs {
        align_items: AlignItems::Start,
        ..row(200.0)
    };
    let mut wrap_text = |_index: usize, main_size: f32| CrossMeasure {
        cross_size: 1500.0 / main_size,
        baseline: None,
    };
    let output = layout_flex(&container, &[first, second], &mut wrap_text);
    let crosses: Vec<f32> = output
        .placements
        .iter()
        .map(|placement| placement.cross_size)
        .collect();
    assert!(all_approx(&crosses, &[30.0, 10.0]));
    assert!(approx(output.content_cross, 30.0));
}
