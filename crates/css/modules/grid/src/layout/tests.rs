use super::*;
use crate::types::{GridTrackSize, TrackBreadth, TrackRepeat};

fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}

fn tracks(sizes: &[f32], gap: f32) -> GridAxisTracks {
    GridAxisTracks::new(sizes.iter().map(|size| GridTrackSize::fixed(*size)).collect(), gap)
}

fn sized_item(node_id: usize, inline: f32) -> GridItem {
    let mut item = GridItem::new(node_id);
    item.min_content_inline = inline;
    item.max_content_inline = inline;
    item
}

/// Measure that keeps the given inline size and reports fixed block sizes.
fn fixed_blocks(blocks: Vec<f32>) -> impl FnMut(usize, f32) -> GridMeasured {
    move |index: usize, inline_size: f32| GridMeasured {
        inline_size,
        block_size: blocks.get(index).copied().unwrap_or(0.0),
        baseline: None,
    }
}

fn offsets(result: &GridLayoutResult) -> Vec<(f32, f32)> {
    result
        .items
        .iter()
        .map(|item| (item.inline_offset, item.block_offset))
        .collect()
}

/// # Panics
/// Panics if four auto items do not fill a 2×2 grid of 100px tracks in order.
#[test]
fn two_by_two_fixed_tracks() {
    let items: Vec<GridItem> = (0..4).map(|id| sized_item(id, 50.0)).collect();
    let mut inputs = GridContainerInputs::new(
        tracks(&[100.0, 100.0], 0.0),
        tracks(&[100.0, 100.0], 0.0),
        200.0,
        200.0,
    );
    inputs.justify_items = GridAlignment::Start;
    inputs.align_items = GridAlignment::Start;
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![50.0; 4]));
    assert_eq!(
        offsets(&result),
        vec![(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)]
    );
    assert!(
        result
            .items
            .iter()
            .all(|item| approx(item.inline_size, 50.0) && approx(item.block_size, 50.0))
    );
    assert!(approx(result.content_inline_size, 200.0));
    assert!(approx(result.content_block_size, 200.0));
}

/// # Panics
/// Panics if unset alignment does not stretch items to their cells.
#[test]
fn items_stretch_by_default() {
    let items: Vec<GridItem> = (0..2).map(|id| sized_item(id, 20.0)).collect();
    let inputs = GridContainerInputs::new(
        tracks(&[100.0, 60.0], 0.0),
        tracks(&[80.0], 0.0),
        160.0,
        80.0,
    );
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![10.0, 10.0]));
    let sizes: Vec<(f32, f32)> = result
        .items
        .iter()
        .map(|item| (item.inline_size, item.block_size))
        .collect();
    assert_eq!(sizes, vec![(100.0, 80.0), (60.0, 80.0)]);
}

/// # Panics
/// Panics if fr columns do not share the space left after gaps.
#[test]
fn fr_columns_with_gap() {
    let items: Vec<GridItem> = (0..2).map(GridItem::new).collect();
    let columns = GridAxisTracks::new(vec![GridTrackSize::fr(1.0), GridTrackSize::fr(2.0)], 10.0);
    let inputs = GridContainerInputs::new(columns, GridAxisTracks::default(), 310.0, f32::INFINITY);
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![20.0, 20.0]));
    assert_eq!(result.columns.sizes, vec![100.0, 200.0]);
    assert!(result.items.get(1).is_some_and(|item| approx(item.inline_offset, 110.0)));
    assert!(approx(result.content_block_size, 20.0));
}

/// # Panics
/// Panics if auto-fit does not collapse the empty repetition.
#[test]
fn auto_fit_collapses_empty_tracks() {
    let items = vec![GridItem::new(0)];
    let pattern = vec![GridTrackSize::minmax(TrackBreadth::Length(200.0), TrackBreadth::Flex(1.0))];
    let columns =
        GridAxisTracks::with_auto_repeat(Vec::new(), 10.0, TrackRepeat::AutoFit(pattern.clone()));
    let inputs = GridContainerInputs::new(columns, GridAxisTracks::default(), 569.0, f32::INFINITY);
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![30.0]));
    assert_eq!(result.columns.sizes, vec![569.0, 0.0]);
    assert!(result.items.first().is_some_and(|item| approx(item.inline_size, 569.0)));

    let fill_columns =
        GridAxisTracks::with_auto_repeat(Vec::new(), 10.0, TrackRepeat::AutoFill(pattern));
    let fill_inputs = GridContainerInputs::new(
        fill_columns,
        GridAxisTracks::default(),
        569.0,
        f32::INFINITY,
    );
    let filled = layout_grid(&items, &fill_inputs, &mut fixed_blocks(vec![30.0]));
    assert_eq!(filled.columns.sizes, vec![279.5, 279.5]);
}

/// # Panics
/// Panics if a spanning item is not split across rows minus the gap.
#[test]
fn spanning_item_splits_across_rows() {
    let mut tall = GridItem::new(0);
    tall.row_start = Some(1);
    tall.row_span = 2;
    let items = vec![tall, GridItem::new(1)];
    let inputs = GridContainerInputs::new(
        tracks(&[100.0, 100.0], 0.0),
        GridAxisTracks::new(Vec::new(), 10.0),
        200.0,
        f32::INFINITY,
    );
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![110.0, 20.0]));
    assert_eq!(result.rows.sizes, vec![50.0, 50.0]);
    assert!(result.items.first().is_some_and(|item| approx(item.block_size, 110.0)));
    assert!(
        result
            .items
            .get(1)
            .is_some_and(|item| approx(item.inline_offset, 100.0) && approx(item.block_offset, 0.0))
    );
}

/// # Panics
/// Panics if implicit rows ignore `grid-auto-rows`.
#[test]
fn implicit_rows_use_auto_size() {
    let items: Vec<GridItem> = (0..3).map(GridItem::new).collect();
    let rows = GridAxisTracks::new(Vec::new(), 0.0).with_auto_size(GridTrackSize::fixed(30.0));
    let inputs = GridContainerInputs::new(tracks(&[40.0, 40.0], 0.0), rows, 80.0, f32::INFINITY);
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![5.0; 3]));
    assert_eq!(result.rows.sizes, vec![30.0, 30.0]);
    assert!(result.items.get(2).is_some_and(|item| approx(item.block_offset, 30.0)));
}

/// # Panics
/// Panics if justify-content does not offset tracks in a definite container.
#[test]
fn content_distribution_in_definite_container() {
    let items: Vec<GridItem> = (0..2).map(GridItem::new).collect();
    let mut inputs = GridContainerInputs::new(
        tracks(&[50.0, 50.0], 0.0),
        tracks(&[20.0], 0.0),
        300.0,
        20.0,
    );
    inputs.definite_inline = Some(300.0);
    inputs.justify_content = ContentDistribution::Center;
    let centered = layout_grid(&items, &inputs, &mut fixed_blocks(vec![20.0, 20.0]));
    assert_eq!(centered.columns.offsets, vec![100.0, 150.0]);

    inputs.justify_content = ContentDistribution::SpaceBetween;
    let spaced = layout_grid(&items, &inputs, &mut fixed_blocks(vec![20.0, 20.0]));
    assert_eq!(spaced.columns.offsets, vec![0.0, 250.0]);
}

/// # Panics
/// Panics if unset align-content does not grow every row.
#[test]
fn unset_align_content_stretches_rows() {
    let items: Vec<GridItem> = (0..2).map(GridItem::new).collect();
    let mut inputs = GridContainerInputs::new(
        tracks(&[100.0], 0.0),
        GridAxisTracks::default(),
        100.0,
        300.0,
    );
    inputs.definite_block = Some(300.0);
    let result = layout_grid(&items, &inputs, &mut fixed_blocks(vec![50.0, 50.0]));
    assert_eq!(result.rows.sizes, vec![150.0, 150.0]);
    assert!(result.items.get(1).is_some_and(|item| approx(item.block_offset, 150.0)));
}

/// # Panics
/// Panics if baseline-aligned items in a row do not share a baseline.
#[test]
fn baseline_alignment_in_row() {
    let items: Vec<GridItem> = (0..3).map(GridItem::new).collect();
    let mut inputs = GridContainerInputs::new(
        tracks(&[100.0, 100.0, 100.0], 0.0),
        GridAxisTracks::default(),
        300.0,
        f32::INFINITY,
    );
    inputs.align_items = GridAlignment::Baseline;
    let metrics = [(40.0, 20.0), (50.0, 30.0), (45.0, 25.0)];
    let mut measure = |index: usize, inline_size: f32| {
        let (block_size, baseline) = metrics.get(index).copied().unwrap_or((0.0, 0.0));
        GridMeasured {
            inline_size,
            block_size,
            baseline: Some(baseline),
        }
    };
    let result = layout_grid(&items, &inputs, &mut measure);
    let block_offsets: Vec<f32> = result.items.iter().map(|item| item.block_offset).collect();
    assert_eq!(block_offsets, vec![10.0, 0.0, 5.0]);
    assert!(result.first_baseline.is_some_and(|baseline| approx(baseline, 30.0)));
}

/// # Panics
/// Panics if an aspect-ratio item is not fitted into a short cell.
#[test]
fn aspect_ratio_item_fits_cell() {
    let mut item = GridItem::new(0);
    item.aspect_ratio = Some(2.0);
    let inputs = GridContainerInputs::new(tracks(&[100.0], 0.0), tracks(&[30.0], 0.0), 100.0, 30.0);
    let mut measure = |_index: usize, inline_size: f32| GridMeasured {
        inline_size,
        block_size: inline_size / 2.0,
        baseline: None,
    };
    let result = layout_grid(&[item], &inputs, &mut measure);
    let placed = result
        .items
        .first()
        .map(|placed| (placed.inline_offset, placed.inline_size, placed.block_size));
    assert_eq!(placed, Some((0.0, 60.0, 30.0)));
}

/// # Panics
/// Panics if named areas do not position their items.
#[test]
fn template_areas_place_items() {
    let mut header = GridItem::new(0);
    header.area = Some("head".to_string());
    let mut aside = GridItem::new(1);
    aside.area = Some("side".to_string());
    let mut inputs = GridContainerInputs::new(
        tracks(&[50.0, 50.0], 0.0),
        tracks(&[20.0, 20.0], 0.0),
        100.0,
        40.0,
    );
    inputs.template_areas = Some(GridTemplateAreas::from_rows(&["head head", "main side"]));
    let result = layout_grid(&[header, aside], &inputs, &mut fixed_blocks(vec![10.0, 10.0]));
    assert!(
        result
            .items
            .first()
            .is_some_and(|item| approx(item.inline_size, 100.0) && approx(item.block_offset, 0.0))
    );
    assert_eq!(offsets(&result).get(1).copied(), Some((50.0, 20.0)));
}
