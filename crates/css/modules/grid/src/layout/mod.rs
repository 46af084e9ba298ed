//! Grid layout algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#layout-algorithm>
//!
//! Runs in flow-relative coordinates: columns along the inline axis, rows
//! along the block axis. Offsets are relative to the container's content box.

use log::debug;

use crate::alignment::{ContentDistribution, GridAlignment, align_in_area, distribute_content};
use crate::areas::GridTemplateAreas;
use crate::placement::{ExplicitGrid, GridArea, place_grid_items};
use crate::track_sizing::{
    GridAxis, GridAxisTracks, ResolvedTracks, TrackContribution, add_implicit_tracks_for_placements,
    collapse_auto_fit_tracks, expand_auto_repeat_tracks, gutter_count, size_tracks,
};
use crate::types::{GridAutoFlow, GridItem, GridTrack};

/// Tolerance for treating a measured size as already matching an aspect ratio.
const ASPECT_RATIO_TOLERANCE: f32 = 0.01;

/// Input parameters for grid layout.
#[derive(Debug, Clone, Default)]
pub struct GridContainerInputs {
    /// Column tracks (inline axis)
    pub columns: GridAxisTracks,
    /// Row tracks (block axis)
    pub rows: GridAxisTracks,
    /// Auto-flow direction
    pub auto_flow: GridAutoFlow,
    /// Inline space for `fr`, percentages and auto-repeat; may be infinite.
    pub available_inline: f32,
    /// Block space for `fr`, percentages and auto-repeat; may be infinite.
    pub available_block: f32,
    /// Declared inline content size; enables `justify-content`.
    pub definite_inline: Option<f32>,
    /// Declared block content size; enables `align-content`.
    pub definite_block: Option<f32>,
    pub justify_items: GridAlignment,
    pub align_items: GridAlignment,
    pub justify_content: ContentDistribution,
    pub align_content: ContentDistribution,
    /// `grid-template-areas`
    pub template_areas: Option<GridTemplateAreas>,
}

impl GridContainerInputs {
    /// Create grid container inputs with default alignment and auto-flow.
    pub fn new(
        columns: GridAxisTracks,
        rows: GridAxisTracks,
        available_inline: f32,
        available_block: f32,
    ) -> Self {
        Self {
            columns,
            rows,
            available_inline,
            available_block,
            ..Self::default()
        }
    }
}

/// Size of an item laid out at a given inline size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridMeasured {
    /// Border-box inline size the item ended up with
    pub inline_size: f32,
    /// Border-box block size
    pub block_size: f32,
    /// First baseline from the item's block-start border edge
    pub baseline: Option<f32>,
}

/// Lays an item out at a given inline size.
pub trait GridMeasure {
    /// `index` is the item's position in the slice handed to [`layout_grid`].
    fn measure(&mut self, index: usize, inline_size: f32) -> GridMeasured;
}

impl<F> GridMeasure for F
where
    F: FnMut(usize, f32) -> GridMeasured,
{
    #[inline]
    fn measure(&mut self, index: usize, inline_size: f32) -> GridMeasured {
        self(index, inline_size)
    }
}

/// A grid item with its final position and size.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacedItem<NodeId = usize> {
    /// Node identifier (generic to support different node ID types)
    pub node_id: NodeId,
    /// Border-box inline offset from the content edge
    pub inline_offset: f32,
    /// Border-box block offset from the content edge
    pub block_offset: f32,
    pub inline_size: f32,
    pub block_size: f32,
    /// Grid area occupied
    pub area: GridArea,
}

/// Result of grid layout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayoutResult<NodeId = usize> {
    /// Placed items, in input order
    pub items: Vec<GridPlacedItem<NodeId>>,
    /// Σ column sizes + gutters
    pub content_inline_size: f32,
    /// Σ row sizes + gutters
    pub content_block_size: f32,
    pub columns: ResolvedTracks,
    pub rows: ResolvedTracks,
    /// Baseline of the first item in the first row that has one.
    pub first_baseline: Option<f32>,
}

/// Per-item working state between the sizing passes.
#[derive(Debug, Clone, Copy)]
struct ItemPass {
    area: GridArea,
    justify: GridAlignment,
    align: GridAlignment,
    measured: GridMeasured,
}

/// Add implicit tracks and collapse empty auto-fit tracks.
fn finish_axis(
    tracks: Vec<GridTrack>,
    axis_tracks: &GridAxisTracks,
    placements: &[GridArea],
    axis: GridAxis,
) -> Vec<GridTrack> {
    let mut tracks =
        add_implicit_tracks_for_placements(tracks, placements, axis, axis_tracks.auto_size);
    collapse_auto_fit_tracks(&mut tracks, placements, axis, axis_tracks.is_auto_fit());
    tracks
}

/// Apply content distribution (when the container is definite) and position tracks.
fn resolve_axis(
    tracks: &[GridTrack],
    mut sizes: Vec<f32>,
    gap: f32,
    definite: Option<f32>,
    distribution: ContentDistribution,
) -> ResolvedTracks {
    let collapsed: Vec<bool> = tracks.iter().map(|track| track.collapsed).collect();
    let (start, between) = definite.map_or((0.0, 0.0), |container_size| {
        let mut visible: Vec<f32> = sizes
            .iter()
            .zip(&collapsed)
            .filter(|(_, is_collapsed)| !**is_collapsed)
            .map(|(size, _)| *size)
            .collect();
        let gaps_total = gap * gutter_count(&collapsed) as f32;
        let spacing = distribute_content(distribution, container_size, &mut visible, gaps_total);
        let mut grown = visible.into_iter();
        for (size, is_collapsed) in sizes.iter_mut().zip(&collapsed) {
            if !*is_collapsed {
                *size = grown.next().unwrap_or(*size);
            }
        }
        spacing
    });
    ResolvedTracks::position(sizes, &collapsed, gap, start, between)
}

/// Inline size an item is laid out at before rows are known.
fn provisional_inline_size<NodeId>(
    item: &GridItem<NodeId>,
    justify: GridAlignment,
    area_inline: f32,
) -> f32 {
    let room = (area_inline - item.inline_margins()).max(0.0);
    if let Some(declared) = item.inline_size {
        return declared;
    }
    if item.aspect_ratio.is_some() || justify == GridAlignment::Stretch {
        return room;
    }
    let min_content = (item.min_content_inline - item.inline_margins()).max(0.0);
    let max_content = (item.max_content_inline - item.inline_margins()).max(0.0);
    max_content.min(room).max(min_content)
}

/// Fit an aspect-ratio item into its cell, returning `(inline, block)`.
///
/// A measured size already matching the ratio is kept but shrunk to fit the
/// cell; a declared size that does not match is used as is; otherwise the
/// item fills the cell's inline size and is limited by its block size.
fn aspect_ratio_size<NodeId>(
    item: &GridItem<NodeId>,
    ratio: f32,
    measured: GridMeasured,
    cell_inline: f32,
    cell_block: f32,
) -> (f32, f32) {
    let cell_inline = (cell_inline - item.inline_margins()).max(0.0);
    let cell_block = (cell_block - item.block_margins()).max(0.0);
    let has_measured = measured.inline_size > 0.0 && measured.block_size > 0.0;
    if has_measured
        && (measured.inline_size / measured.block_size - ratio).abs() < ASPECT_RATIO_TOLERANCE
    {
        let mut inline = measured.inline_size;
        let mut block = measured.block_size;
        if inline > cell_inline {
            inline = cell_inline;
            block = inline / ratio;
        }
        if block > cell_block {
            block = cell_block;
            inline = block * ratio;
        }
        return (inline, block);
    }
    if has_measured && (item.inline_size.is_some() || item.block_size.is_some()) {
        return (measured.inline_size, measured.block_size);
    }
    let mut inline = cell_inline;
    let mut block = inline / ratio;
    if block > cell_block {
        block = cell_block;
        inline = block * ratio;
    }
    (inline, block)
}

/// Inline contributions of every item to the columns it spans.
fn column_contributions<NodeId>(
    items: &[GridItem<NodeId>],
    placements: &[GridArea],
) -> Vec<TrackContribution> {
    items
        .iter()
        .zip(placements)
        .map(|(item, area)| TrackContribution {
            start: area.first_col(),
            span: area.col_span(),
            min_content: item.min_content_inline,
            max_content: item.max_content_inline,
        })
        .collect()
}

/// Measure each item at its provisional inline size inside its column area.
fn measure_items<NodeId, M: GridMeasure>(
    items: &[GridItem<NodeId>],
    placements: &[GridArea],
    inputs: &GridContainerInputs,
    columns: &ResolvedTracks,
    measure: &mut M,
) -> Vec<ItemPass> {
    items
        .iter()
        .zip(placements)
        .enumerate()
        .map(|(index, (item, area))| {
            let has_ratio = item.aspect_ratio.is_some();
            let justify = item.justify_self.resolve_self(inputs.justify_items, has_ratio);
            let align = item.align_self.resolve_self(inputs.align_items, has_ratio);
            let (_, area_inline) = columns.span_extent(area.first_col(), area.col_span());
            let inline_size = provisional_inline_size(item, justify, area_inline);
            ItemPass {
                area: *area,
                justify,
                align,
                measured: measure.measure(index, inline_size),
            }
        })
        .collect()
}

/// Block contributions (measured size plus block margins) to the rows each item spans.
fn row_contributions<NodeId>(
    items: &[GridItem<NodeId>],
    passes: &[ItemPass],
) -> Vec<TrackContribution> {
    items
        .iter()
        .zip(passes)
        .map(|(item, pass)| {
            let outer = pass.measured.block_size + item.block_margins();
            TrackContribution {
                start: pass.area.first_row(),
                span: pass.area.row_span(),
                min_content: outer,
                max_content: outer,
            }
        })
        .collect()
}

/// Run the grid layout algorithm.
///
/// Spec: §12 Grid Sizing Algorithm
/// <https://www.w3.org/TR/css-grid-2/#layout-algorithm>
///
/// 1. Expand repeats and place items, extending the grid with implicit tracks
/// 2. Size columns from the items' inline contributions
/// 3. Measure each item at its column-area width and size rows from the results
/// 4. Distribute free space in definite containers
/// 5. Align each item within its area
pub fn layout_grid<NodeId: Clone, M: GridMeasure>(
    items: &[GridItem<NodeId>],
    inputs: &GridContainerInputs,
    measure: &mut M,
) -> GridLayoutResult<NodeId> {
    let columns = expand_auto_repeat_tracks(&inputs.columns, inputs.available_inline);
    let rows = expand_auto_repeat_tracks(&inputs.rows, inputs.available_block);
    let areas = inputs.template_areas.as_ref();
    let explicit = ExplicitGrid {
        rows: rows.len().max(areas.map_or(0, GridTemplateAreas::row_count)),
        columns: columns.len().max(areas.map_or(0, GridTemplateAreas::column_count)),
    };
    let placements = place_grid_items(items, explicit, inputs.auto_flow, areas);
    let columns = finish_axis(columns, &inputs.columns, &placements, GridAxis::Column);
    let rows = finish_axis(rows, &inputs.rows, &placements, GridAxis::Row);

    let column_sizes = size_tracks(
        &columns,
        inputs.available_inline,
        inputs.columns.gap,
        &column_contributions(items, &placements),
        GridAxis::Column,
    );
    let column_tracks = resolve_axis(
        &columns,
        column_sizes,
        inputs.columns.gap,
        inputs.definite_inline,
        inputs.justify_content,
    );

    let passes = measure_items(items, &placements, inputs, &column_tracks, measure);
    let row_sizes = size_tracks(
        &rows,
        inputs.available_block,
        inputs.rows.gap,
        &row_contributions(items, &passes),
        GridAxis::Row,
    );
    let row_tracks = resolve_axis(
        &rows,
        row_sizes,
        inputs.rows.gap,
        inputs.definite_block,
        inputs.align_content,
    );

    let placed = place_items(items, &passes, &column_tracks, &row_tracks);
    let first_baseline = first_row_baseline(&placed, &passes);
    let content_inline_size =
        column_tracks.end - column_tracks.offsets.first().copied().unwrap_or(0.0);
    let content_block_size = row_tracks.end - row_tracks.offsets.first().copied().unwrap_or(0.0);
    debug!(
        target: "css::grid::layout",
        "[GRID-LAYOUT] items={} columns={} rows={} content={content_inline_size:.3}x{content_block_size:.3}",
        items.len(),
        column_tracks.sizes.len(),
        row_tracks.sizes.len()
    );
    GridLayoutResult {
        items: placed,
        content_inline_size,
        content_block_size,
        columns: column_tracks,
        rows: row_tracks,
        first_baseline,
    }
}

/// Largest `margin-block-start + baseline` among baseline-aligned items
/// starting in `row`.
fn row_max_above(passes: &[ItemPass], items_margin: &[f32], row: usize) -> f32 {
    passes
        .iter()
        .zip(items_margin)
        .filter(|(pass, _)| pass.align == GridAlignment::Baseline && pass.area.first_row() == row)
        .map(|(pass, margin)| margin + pass.measured.baseline.unwrap_or(pass.measured.block_size))
        .fold(0.0f32, f32::max)
}

/// Align every item inside its area.
fn place_items<NodeId: Clone>(
    items: &[GridItem<NodeId>],
    passes: &[ItemPass],
    columns: &ResolvedTracks,
    rows: &ResolvedTracks,
) -> Vec<GridPlacedItem<NodeId>> {
    let margins_block_start: Vec<f32> = items.iter().map(|item| item.margin_block_start).collect();
    items
        .iter()
        .zip(passes)
        .map(|(item, pass)| {
            let (area_inline_offset, area_inline) =
                columns.span_extent(pass.area.first_col(), pass.area.col_span());
            let (area_block_offset, area_block) =
                rows.span_extent(pass.area.first_row(), pass.area.row_span());
            let (natural_inline, natural_block) = item.aspect_ratio.map_or(
                (pass.measured.inline_size, pass.measured.block_size),
                |ratio| aspect_ratio_size(item, ratio, pass.measured, area_inline, area_block),
            );
            let no_ratio = item.aspect_ratio.is_none();
            let (inline_offset, inline_size) = align_in_area(
                pass.justify,
                area_inline,
                natural_inline,
                item.margin_inline_start,
                item.margin_inline_end,
                no_ratio && item.inline_size.is_none(),
            );
            let (block_offset, block_size) = if pass.align == GridAlignment::Baseline {
                let above = item.margin_block_start
                    + pass.measured.baseline.unwrap_or(pass.measured.block_size);
                let max_above = row_max_above(passes, &margins_block_start, pass.area.first_row());
                (item.margin_block_start + (max_above - above), natural_block)
            } else {
                align_in_area(
                    pass.align,
                    area_block,
                    natural_block,
                    item.margin_block_start,
                    item.margin_block_end,
                    no_ratio && item.block_size.is_none(),
                )
            };
            GridPlacedItem {
                node_id: item.node_id.clone(),
                inline_offset: area_inline_offset + inline_offset,
                block_offset: area_block_offset + block_offset,
                inline_size,
                block_size,
                area: pass.area,
            }
        })
        .collect()
}

/// Container baseline: the first item in the first row that reports one.
fn first_row_baseline<NodeId>(
    placed: &[GridPlacedItem<NodeId>],
    passes: &[ItemPass],
) -> Option<f32> {
    placed
        .iter()
        .zip(passes)
        .filter(|(_, pass)| pass.area.first_row() == 0)
        .find_map(|(item, pass)| {
            pass.measured
                .baseline
                .map(|baseline| item.block_offset + baseline)
        })
}

#[cfg(test)]
mod tests;
