//! Grid container adapter.
//!
//! Builds [`GridItem`] records for the in-flow children, runs the grid
//! solver in flow-relative terms, and maps the placed items onto the
//! content box through the writing mode. Columns follow the inline axis.

use css_box::clamp::non_negative;
use css_box::{Constraints, UNBOUNDED};
use css_flexbox::{AlignContent, AlignItems, JustifyContent};
use css_grid::{
    ContentDistribution, GridAlignment, GridAxisTracks, GridContainerInputs, GridItem,
    GridMeasured, GridTemplateAreas, layout_grid,
};
use css_writing_modes::{LogicalRect, LogicalSize, WritingMode};
use log::debug;

use super::{Fragment, flow_constraints, measure, physical_frame};
use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::{ResolvedBox, resolve_box};
use crate::chapter10::{UsedAxis, logical_ratio, resolve_flow_size, used_height, used_width};
use crate::sizing::{max_content_contribution, min_content_contribution};
use crate::style_model::Style;

/// Lay out `node` as a grid container.
///
/// Spec: CSS Grid L2 §12 Grid Sizing
pub fn compute_grid(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Fragment {
    let style = &node.style;
    let mode = style.writing_mode;
    let boxed = resolve_box(style, ctx);
    let inset = boxed.logical_inset(mode);
    let flow = resolve_flow_size(node, &boxed, constraints, ctx);
    let available = LogicalSize::from_physical(constraints.max_size(), mode);
    let content_inline = flow.inline.map(|inline| non_negative(inline - inset.inline_sum()));
    let content_block = flow.block.map(|block| non_negative(block - inset.block_sum()));

    let mut inputs = container_inputs(style, ctx);
    inputs.available_inline =
        content_inline.unwrap_or_else(|| non_negative(available.inline - inset.inline_sum()));
    inputs.available_block =
        content_block.unwrap_or_else(|| non_negative(available.block - inset.block_sum()));
    inputs.definite_inline =
        content_inline.filter(|_| !fills_inline(node, &boxed, constraints, ctx));
    inputs.definite_block = content_block;

    let (indices, in_flow) = in_flow_children(node);
    let items = grid_items(&in_flow, mode, ctx);
    let mut measure_item = |slot: usize, inline_size: f32| {
        in_flow.get(slot).map_or_else(GridMeasured::default, |child| {
            let measured = measure(
                child,
                flow_constraints(mode, (inline_size, inline_size), (0.0, UNBOUNDED)),
                ctx,
            );
            let size = LogicalSize::from_physical(measured.size, mode);
            GridMeasured {
                inline_size: size.inline,
                block_size: size.block,
                baseline: measured.baseline.filter(|_| !mode.is_vertical()),
            }
        })
    };
    let result = layout_grid(&items, &inputs, &mut measure_item);

    let inline = flow.inline_or_content(result.content_inline_size, inset.inline_sum());
    let block = flow.block_or_content(inline, result.content_block_size, inset.block_sum());
    let container_block = non_negative(block - inset.block_sum());
    debug!(
        target: "css::core::grid",
        "[GRID-ADAPTER] items={} tracks={}x{} content={:.3}x{:.3}",
        items.len(),
        result.columns.sizes.len(),
        result.rows.sizes.len(),
        result.content_inline_size,
        result.content_block_size
    );
    Fragment {
        size: constraints.constrain(LogicalSize::new(inline, block).to_physical(mode)),
        baseline: result
            .first_baseline
            .filter(|_| !mode.is_vertical())
            .map(|baseline| baseline + inset.block_start),
        children: result
            .items
            .iter()
            .filter_map(|placed| {
                let index = *indices.get(placed.node_id)?;
                let rect = LogicalRect {
                    inline_start: placed.inline_offset,
                    block_start: placed.block_offset,
                    inline_size: placed.inline_size,
                    block_size: placed.block_size,
                };
                Some(physical_frame(index, rect, mode, container_block))
            })
            .collect(),
        text_layout: None,
    }
}

/// Content-box inline size of the columns when laid out in `available`
/// inline space: `0` for min-content, infinity for max-content.
pub fn grid_intrinsic_inline_size(node: &Node, ctx: &LayoutContext<'_>, available: f32) -> f32 {
    let mut inputs = container_inputs(&node.style, ctx);
    inputs.available_inline = available;
    inputs.available_block = UNBOUNDED;
    let (_, in_flow) = in_flow_children(node);
    let items = grid_items(&in_flow, node.style.writing_mode, ctx);
    let mut inline_only = |_: usize, inline_size: f32| GridMeasured {
        inline_size,
        ..GridMeasured::default()
    };
    layout_grid(&items, &inputs, &mut inline_only).content_inline_size
}

/// An `auto` inline size stretched over the available space is not treated
/// as definite, so tracks are not distributed across it.
fn fills_inline(
    node: &Node,
    boxed: &ResolvedBox,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
) -> bool {
    let used = if node.style.writing_mode.is_vertical() {
        used_height(node, boxed, constraints)
    } else {
        used_width(node, boxed, constraints, ctx)
    };
    matches!(used, UsedAxis::Fill(_))
}

/// Child indices of the in-flow children, and the children themselves.
fn in_flow_children(node: &Node) -> (Vec<usize>, Vec<&Node>) {
    node.children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_in_flow())
        .unzip()
}

/// Track lists, gaps, flow, areas and alignment; the available and definite
/// sizes are left to the caller.
fn container_inputs(style: &Style, ctx: &LayoutContext<'_>) -> GridContainerInputs {
    let template_areas = (!style.grid_template_areas.is_empty())
        .then(|| GridTemplateAreas::from_rows(&style.grid_template_areas));
    GridContainerInputs {
        columns: GridAxisTracks {
            tracks: style.grid_template_columns.clone(),
            gap: ctx.px(style.column_gap(), &style.text),
            auto_repeat: style.grid_repeat_columns.clone(),
            auto_size: style.grid_auto_columns,
        },
        rows: GridAxisTracks {
            tracks: style.grid_template_rows.clone(),
            gap: ctx.px(style.row_gap(), &style.text),
            auto_repeat: style.grid_repeat_rows.clone(),
            auto_size: style.grid_auto_rows,
        },
        auto_flow: style.grid_auto_flow,
        justify_items: style.justify_items,
        align_items: grid_alignment(style.align_items),
        justify_content: justify_distribution(style.justify_content),
        align_content: align_distribution(style.align_content),
        template_areas,
        ..GridContainerInputs::default()
    }
}

/// One item record per in-flow child; `node_id` is the child's slot in `in_flow`.
fn grid_items(in_flow: &[&Node], mode: WritingMode, ctx: &LayoutContext<'_>) -> Vec<GridItem> {
    in_flow
        .iter()
        .enumerate()
        .map(|(slot, child)| {
            let style = &child.style;
            let boxed = resolve_box(style, ctx);
            let margins = boxed.logical_margins(mode);
            let (min_content, max_content) = if mode.is_vertical() {
                let extent = LogicalSize::from_physical(
                    measure(child, Constraints::unconstrained(), ctx).size,
                    mode,
                )
                .inline
                    + margins.inline_sum();
                (extent, extent)
            } else {
                (
                    min_content_contribution(child, ctx),
                    max_content_contribution(child, ctx),
                )
            };
            GridItem {
                row_start: style.grid_row_start,
                row_end: style.grid_row_end,
                col_start: style.grid_column_start,
                col_end: style.grid_column_end,
                row_span: style.grid_row_span.max(1),
                col_span: style.grid_column_span.max(1),
                area: style.grid_area.clone(),
                min_content_inline: min_content,
                max_content_inline: max_content,
                margin_inline_start: margins.inline_start,
                margin_inline_end: margins.inline_end,
                margin_block_start: margins.block_start,
                margin_block_end: margins.block_end,
                inline_size: boxed.declared_inline(mode),
                block_size: boxed.declared_block(mode),
                aspect_ratio: logical_ratio(style.aspect_ratio, mode),
                justify_self: style.justify_self,
                align_self: grid_alignment(style.align_self),
                ..GridItem::new(slot)
            }
        })
        .collect()
}

const fn grid_alignment(value: AlignItems) -> GridAlignment {
    match value {
        AlignItems::Unset => GridAlignment::Unset,
        AlignItems::Start => GridAlignment::Start,
        AlignItems::End => GridAlignment::End,
        AlignItems::Center => GridAlignment::Center,
        AlignItems::Baseline => GridAlignment::Baseline,
        AlignItems::Stretch => GridAlignment::Stretch,
    }
}

const fn justify_distribution(value: JustifyContent) -> ContentDistribution {
    match value {
        JustifyContent::Unset => ContentDistribution::Unset,
        JustifyContent::Start => ContentDistribution::Start,
        JustifyContent::End => ContentDistribution::End,
        JustifyContent::Center => ContentDistribution::Center,
        JustifyContent::SpaceBetween => ContentDistribution::SpaceBetween,
        JustifyContent::SpaceAround => ContentDistribution::SpaceAround,
        JustifyContent::SpaceEvenly => ContentDistribution::SpaceEvenly,
    }
}

const fn align_distribution(value: AlignContent) -> ContentDistribution {
    match value {
        AlignContent::Unset => ContentDistribution::Unset,
        AlignContent::Start => ContentDistribution::Start,
        AlignContent::End => ContentDistribution::End,
        AlignContent::Center => ContentDistribution::Center,
        AlignContent::SpaceBetween => ContentDistribution::SpaceBetween,
        AlignContent::SpaceAround => ContentDistribution::SpaceAround,
        AlignContent::SpaceEvenly => ContentDistribution::SpaceEvenly,
        AlignContent::Stretch => ContentDistribution::Stretch,
    }
}
