//! Flex container adapter.
//!
//! Turns the in-flow children into [`FlexChild`] records in main/cross
//! terms, runs the flex solver, and maps its placements back onto the
//! content box through the writing mode.

use css_box::clamp::non_negative;
use css_box::{BoxSizing, Constraints, UNBOUNDED};
use css_flexbox::{
    AlignItems, Axes, CrossMeasure, FlexChild, FlexContainerInputs, FlexPlacement, FlexWrap,
    ItemRef, layout_flex, resolve_axes,
};
use css_values_units::Dimension;
use css_writing_modes::{LogicalRect, LogicalSize, WritingMode};
use log::debug;

use super::{Fragment, flow_constraints, measure, physical_frame};
use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::resolve_box;
use crate::chapter10::resolve_flow_size;
use crate::sizing::{fit_content_width, max_content_width, min_content_width};
use crate::style_model::Style;

/// What every item of one container is measured against.
#[derive(Clone, Copy, Debug)]
struct FlexFrame {
    mode: WritingMode,
    axes: Axes,
    wrap: FlexWrap,
    align_items: AlignItems,
    main_limit: f32,
    cross_available: f32,
    baselines_apply: bool,
}

impl FlexFrame {
    /// Takes the known content main size and content block size.
    fn new(
        style: &Style,
        axes: Axes,
        (main_size, content_block): (Option<f32>, Option<f32>),
        available_inline: f32,
    ) -> Self {
        let mode = style.writing_mode;
        let (main_limit, cross_available) = if axes.main_is_inline {
            (
                main_size.unwrap_or(available_inline),
                content_block.unwrap_or(UNBOUNDED),
            )
        } else {
            (main_size.unwrap_or(UNBOUNDED), available_inline)
        };
        Self {
            mode,
            axes,
            wrap: style.flex_wrap,
            align_items: style.align_items,
            main_limit,
            cross_available,
            baselines_apply: axes.main_is_inline && !mode.is_vertical(),
        }
    }

    /// Constraints from main/cross `(min, max)` pairs.
    fn constraints(&self, main: (f32, f32), cross: (f32, f32)) -> Constraints {
        if self.axes.main_is_inline {
            flow_constraints(self.mode, main, cross)
        } else {
            flow_constraints(self.mode, cross, main)
        }
    }

    /// A measured size as `(main, cross)`.
    fn split(&self, size: LogicalSize) -> (f32, f32) {
        if self.axes.main_is_inline {
            (size.inline, size.block)
        } else {
            (size.block, size.inline)
        }
    }

    fn logical_rect(&self, placement: &FlexPlacement) -> LogicalRect {
        if self.axes.main_is_inline {
            LogicalRect {
                inline_start: placement.main_offset,
                block_start: placement.cross_offset,
                inline_size: placement.main_size,
                block_size: placement.cross_size,
            }
        } else {
            LogicalRect {
                inline_start: placement.cross_offset,
                block_start: placement.main_offset,
                inline_size: placement.cross_size,
                block_size: placement.main_size,
            }
        }
    }
}

/// Lay out `node` as a flex container.
///
/// Spec: CSS Flexbox L1 §9 Flex Layout Algorithm
pub fn compute_flex(node: &Node, constraints: Constraints, ctx: &LayoutContext<'_>) -> Fragment {
    let style = &node.style;
    let mode = style.writing_mode;
    let axes = resolve_axes(style.flex_direction, mode);
    let boxed = resolve_box(style, ctx);
    let inset = boxed.logical_inset(mode);
    let flow = resolve_flow_size(node, &boxed, constraints, ctx);
    let available = LogicalSize::from_physical(constraints.max_size(), mode);
    let content_inline = flow.inline.map(|inline| non_negative(inline - inset.inline_sum()));
    let content_block = flow.block.map(|block| non_negative(block - inset.block_sum()));
    let available_inline =
        content_inline.unwrap_or_else(|| non_negative(available.inline - inset.inline_sum()));
    let (main_size, cross_size) = if axes.main_is_inline {
        (content_inline, content_block)
    } else {
        (content_block, content_inline)
    };
    let frame = FlexFrame::new(style, axes, (main_size, content_block), available_inline);
    let container = container_inputs(style, &frame, main_size, cross_size, ctx);

    let indices: Vec<usize> = node
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_in_flow())
        .map(|(index, _)| index)
        .collect();
    let in_flow: Vec<&Node> = indices
        .iter()
        .filter_map(|index| node.children.get(*index))
        .collect();
    let (items, cross_maxes): (Vec<FlexChild>, Vec<f32>) = in_flow
        .iter()
        .enumerate()
        .map(|(slot, child)| flex_item(child, slot, &frame, ctx))
        .unzip();
    let mut remeasure = |slot: usize, main: f32| {
        let Some((child, cross_max)) = in_flow.get(slot).zip(cross_maxes.get(slot)) else {
            return CrossMeasure::default();
        };
        let measured = measure(child, frame.constraints((main, main), (0.0, *cross_max)), ctx);
        let (_, cross) = frame.split(LogicalSize::from_physical(measured.size, mode));
        CrossMeasure {
            cross_size: cross,
            baseline: measured.baseline.filter(|_| frame.baselines_apply),
        }
    };
    let output = layout_flex(&container, &items, &mut remeasure);

    let content = LogicalSize::new(
        content_inline.unwrap_or(if axes.main_is_inline {
            output.content_main
        } else {
            output.content_cross
        }),
        content_block.unwrap_or(if axes.main_is_inline {
            output.content_cross
        } else {
            output.content_main
        }),
    );
    let inline = flow.inline_or_content(content.inline, inset.inline_sum());
    let block = flow.block_or_content(inline, content.block, inset.block_sum());
    let container_block = non_negative(block - inset.block_sum());
    debug!(
        target: "css::core::flex",
        "[FLEX-ADAPTER] items={} lines={} content={:.3}x{:.3}",
        items.len(),
        output.lines.len(),
        content.inline,
        content.block
    );
    Fragment {
        size: constraints.constrain(LogicalSize::new(inline, block).to_physical(mode)),
        baseline: output
            .first_baseline
            .filter(|_| frame.baselines_apply)
            .map(|baseline| baseline + inset.block_start),
        children: output
            .placements
            .iter()
            .filter_map(|placement| {
                let index = *indices.get(placement.handle.0 as usize)?;
                Some(physical_frame(
                    index,
                    frame.logical_rect(placement),
                    mode,
                    container_block,
                ))
            })
            .collect(),
        text_layout: None,
    }
}

/// Container inputs in content-box main/cross terms. `column-gap` separates
/// items along the inline axis and `row-gap` along the block axis.
fn container_inputs(
    style: &Style,
    frame: &FlexFrame,
    main_size: Option<f32>,
    cross_size: Option<f32>,
    ctx: &LayoutContext<'_>,
) -> FlexContainerInputs {
    let row_gap = ctx.px(style.row_gap(), &style.text);
    let column_gap = ctx.px(style.column_gap(), &style.text);
    let (main_gap, cross_gap) = if frame.axes.main_is_inline {
        (column_gap, row_gap)
    } else {
        (row_gap, column_gap)
    };
    FlexContainerInputs {
        direction: style.flex_direction,
        wrap: style.flex_wrap,
        justify_content: style.justify_content,
        align_items: style.align_items,
        align_content: style.align_content,
        main_size,
        main_limit: frame.main_limit,
        cross_size,
        main_gap,
        cross_gap,
        baselines_apply: frame.baselines_apply,
    }
}

/// Build the flex item record for one child, with the cross-axis room it is
/// measured in.
///
/// Items are measured with an unbounded main size unless the container
/// wraps. In column containers an item that is not stretched shrinks to fit
/// its content across.
fn flex_item(
    child: &Node,
    slot: usize,
    frame: &FlexFrame,
    ctx: &LayoutContext<'_>,
) -> (FlexChild, f32) {
    let mode = frame.mode;
    let main_is_inline = frame.axes.main_is_inline;
    let child_box = resolve_box(&child.style, ctx);
    let margins = child_box.logical_margins(mode);
    let child_inset = child_box.logical_inset(mode);
    let (main_margins, cross_margins, main_inset) = if main_is_inline {
        (
            (margins.inline_start, margins.inline_end),
            (margins.block_start, margins.block_end),
            child_inset.inline_sum(),
        )
    } else {
        (
            (margins.block_start, margins.block_end),
            (margins.inline_start, margins.inline_end),
            child_inset.block_sum(),
        )
    };
    let (declared_main, declared_cross, main_limits, cross_limits) = if main_is_inline {
        (
            child_box.declared_inline(mode),
            child_box.declared_block(mode),
            child_box.inline_limits(mode),
            child_box.block_limits(mode),
        )
    } else {
        (
            child_box.declared_block(mode),
            child_box.declared_inline(mode),
            child_box.block_limits(mode),
            child_box.inline_limits(mode),
        )
    };
    let (auto_main_start, auto_main_end) = child_box.auto_margins_along(mode, main_is_inline);

    let stretches = declared_cross.is_none()
        && child.style.align_self.resolve_self(frame.align_items) == AlignItems::Stretch;
    let mut cross_max = if declared_cross.is_some() {
        UNBOUNDED
    } else {
        non_negative(frame.cross_available - cross_margins.0 - cross_margins.1)
    };
    let horizontal = !mode.is_vertical();
    if !main_is_inline && horizontal && !stretches && child.style.width.is_auto() {
        cross_max = fit_content_width(child, ctx, cross_max, None);
    }
    let main_max = if frame.wrap == FlexWrap::Nowrap {
        UNBOUNDED
    } else {
        non_negative(frame.main_limit - main_margins.0 - main_margins.1)
    };
    let probe = measure(child, frame.constraints((0.0, main_max), (0.0, cross_max)), ctx);
    let (probe_main, probe_cross) = frame.split(LogicalSize::from_physical(probe.size, mode));
    let intrinsic_main = main_is_inline && horizontal;
    let flex_basis = match child.style.flex_basis {
        Dimension::Length(length) => {
            let basis = ctx.px(length, &child.style.text);
            match child.style.box_sizing {
                BoxSizing::ContentBox => non_negative(basis) + main_inset,
                BoxSizing::BorderBox => basis.max(main_inset),
            }
        }
        Dimension::MinContent if intrinsic_main => min_content_width(child, ctx),
        Dimension::MaxContent | Dimension::FitContent(_) if intrinsic_main => {
            max_content_width(child, ctx)
        }
        _ => declared_main.unwrap_or(probe_main),
    };
    let item = FlexChild {
        order: child.style.order,
        flex_grow: child.style.flex_grow.max(0.0),
        flex_shrink: child.style.flex_shrink.max(0.0),
        min_main: main_limits.min,
        max_main: main_limits.max,
        min_cross: cross_limits.min,
        max_cross: cross_limits.max,
        margin_main_start: main_margins.0,
        margin_main_end: main_margins.1,
        margin_cross_start: cross_margins.0,
        margin_cross_end: cross_margins.1,
        margin_main_start_auto: auto_main_start,
        margin_main_end_auto: auto_main_end,
        has_definite_cross: declared_cross.is_some(),
        align_self: child.style.align_self,
        baseline: probe.baseline.filter(|_| frame.baselines_apply),
        ..FlexChild::fixed(ItemRef(slot as u64), flex_basis, probe_cross)
    };
    (item, cross_max)
}
