//! Flex Layout Algorithm — lines, flexible lengths, alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! Everything here works in flow-relative main/cross coordinates. Offsets are
//! relative to the container's content box; the caller maps them to physical
//! space once per item.

mod cross_axis;
mod flexible_lengths;
mod line_breaking;
mod main_axis;
mod multi_line;

#[cfg(test)]
mod tests;

use css_box::clamp::{clamp_min_max, non_negative};
use log::debug;

use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::ItemRef;
use crate::chapter7::sort_items_by_order_stable;
use crate::chapter8::{AlignContent, AlignItems, JustifyContent};

pub use cross_axis::BaselineMetrics;
pub use flexible_lengths::{distribute_grow, distribute_shrink};
pub use line_breaking::{LineRange, break_into_lines};
pub use main_axis::justify_params;
pub use multi_line::align_content_params;

/// Per-pass record for one flex item, in main/cross terms. Sizes are border-box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    pub handle: ItemRef,
    pub order: i32,
    /// Flex base size (`flex-basis`, or the measured main size for `auto`).
    pub flex_basis: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    /// Hypothetical cross size measured before flexing.
    pub cross_size: f32,
    pub min_cross: f32,
    pub max_cross: f32,
    pub margin_main_start: f32,
    pub margin_main_end: f32,
    pub margin_cross_start: f32,
    pub margin_cross_end: f32,
    pub margin_main_start_auto: bool,
    pub margin_main_end_auto: bool,
    /// Item declares its cross size, so it is never stretched.
    pub has_definite_cross: bool,
    /// `align-self`; `Unset` defers to the container's `align-items`.
    pub align_self: AlignItems,
    /// First baseline measured from the item's cross-start border edge.
    pub baseline: Option<f32>,
}

impl FlexChild {
    /// A plain item with the given base size and cross size and no flexibility.
    pub const fn fixed(handle: ItemRef, flex_basis: f32, cross_size: f32) -> Self {
        Self {
            handle,
            order: 0,
            flex_basis,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            cross_size,
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            margin_main_start: 0.0,
            margin_main_end: 0.0,
            margin_cross_start: 0.0,
            margin_cross_end: 0.0,
            margin_main_start_auto: false,
            margin_main_end_auto: false,
            has_definite_cross: false,
            align_self: AlignItems::Unset,
            baseline: None,
        }
    }

    /// Flex base size clamped by min/max main size.
    #[inline]
    pub fn hypothetical_main(&self) -> f32 {
        clamp_min_max(non_negative(self.flex_basis), self.min_main, self.max_main)
    }

    #[inline]
    pub fn main_margins(&self) -> f32 {
        self.margin_main_start + self.margin_main_end
    }

    #[inline]
    pub fn cross_margins(&self) -> f32 {
        self.margin_cross_start + self.margin_cross_end
    }
}

/// Container-level inputs, all in content-box main/cross terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexContainerInputs {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Definite inner main size; `None` means items keep their base sizes.
    pub main_size: Option<f32>,
    /// Space available for line breaking (the main size, or the available space).
    pub main_limit: f32,
    /// Definite inner cross size.
    pub cross_size: Option<f32>,
    /// Gap between adjacent items on a line.
    pub main_gap: f32,
    /// Gap between adjacent lines.
    pub cross_gap: f32,
    /// Baseline alignment only applies when the cross axis is the block axis.
    pub baselines_apply: bool,
}

impl Default for FlexContainerInputs {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: FlexWrap::Nowrap,
            justify_content: JustifyContent::Unset,
            align_items: AlignItems::Unset,
            align_content: AlignContent::Unset,
            main_size: None,
            main_limit: f32::INFINITY,
            cross_size: None,
            main_gap: 0.0,
            cross_gap: 0.0,
            baselines_apply: true,
        }
    }
}

/// Cross size and baseline of an item laid out at its final main size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CrossMeasure {
    pub cross_size: f32,
    pub baseline: Option<f32>,
}

/// Re-measures an item once its main size is known (text wraps differently
/// at a narrower width, so the hypothetical cross size can change).
pub trait MeasureCross {
    /// `index` is the item's position in the slice handed to [`layout_flex`].
    fn measure_cross(&mut self, index: usize, main_size: f32) -> CrossMeasure;
}

impl<F> MeasureCross for F
where
    F: FnMut(usize, f32) -> CrossMeasure,
{
    #[inline]
    fn measure_cross(&mut self, index: usize, main_size: f32) -> CrossMeasure {
        self(index, main_size)
    }
}

/// Keeps the cross sizes measured before flexing.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeepMeasuredCross<'items>(pub &'items [FlexChild]);

impl MeasureCross for KeepMeasuredCross<'_> {
    #[inline]
    fn measure_cross(&mut self, index: usize, _main_size: f32) -> CrossMeasure {
        self.0
            .get(index)
            .map(|child| CrossMeasure {
                cross_size: child.cross_size,
                baseline: child.baseline,
            })
            .unwrap_or_default()
    }
}

/// Final placement of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexPlacement {
    pub handle: ItemRef,
    pub main_offset: f32,
    pub main_size: f32,
    pub cross_offset: f32,
    pub cross_size: f32,
    /// Index of the line holding the item.
    pub line: usize,
    /// The cross size came from `stretch`.
    pub stretched: bool,
}

/// A resolved flex line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Item indices in visual order.
    pub items: Vec<usize>,
    pub cross_offset: f32,
    pub cross_size: f32,
    /// Σ outer main sizes + gaps, before justification.
    pub main_extent: f32,
}

/// Result of laying out one flex container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexLayoutOutput {
    /// One placement per input item, in input order.
    pub placements: Vec<FlexPlacement>,
    pub lines: Vec<FlexLine>,
    /// Inner main size of the container.
    pub content_main: f32,
    /// Inner cross size of the container.
    pub content_cross: f32,
    /// Container baseline from its cross-start content edge.
    pub first_baseline: Option<f32>,
}

/// Working state for one item during a pass.
#[derive(Copy, Clone, Debug)]
struct ItemState {
    main_size: f32,
    cross_size: f32,
    baseline: Option<f32>,
    align: AlignItems,
    stretched: bool,
    main_offset: f32,
    cross_offset: f32,
    line: usize,
}

/// Run the flex layout algorithm for one container.
///
/// Spec: §9 Flex Layout Algorithm
pub fn layout_flex<M: MeasureCross>(
    container: &FlexContainerInputs,
    items: &[FlexChild],
    measure: &mut M,
) -> FlexLayoutOutput {
    let orders: Vec<i32> = items.iter().map(|child| child.order).collect();
    let visual_order = sort_items_by_order_stable(&orders);
    let multi_line = container.wrap.is_multi_line();
    let ranges = break_into_lines(
        items,
        &visual_order,
        container.main_limit,
        container.main_gap,
        multi_line,
    );
    debug!(
        target: "css::flexbox::lines",
        "[FLEX-LINES] items={} lines={} limit={:.3} multi_line={multi_line}",
        items.len(),
        ranges.len(),
        container.main_limit
    );

    let mut states: Vec<ItemState> = items
        .iter()
        .map(|child| ItemState {
            main_size: child.hypothetical_main(),
            cross_size: child.cross_size,
            baseline: child.baseline,
            align: resolve_align(child.align_self, container),
            stretched: false,
            main_offset: 0.0,
            cross_offset: 0.0,
            line: 0,
        })
        .collect();

    let mut lines: Vec<FlexLine> = Vec::with_capacity(ranges.len());
    for (line_index, range) in ranges.iter().enumerate() {
        let line_items: Vec<usize> = visual_order
            .get(range.start..range.end)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();
        resolve_line_main_sizes(container, items, &line_items, &mut states);
        for &index in &line_items {
            let Some(state) = states.get_mut(index) else {
                continue;
            };
            let measured = measure.measure_cross(index, state.main_size);
            state.cross_size = measured.cross_size;
            state.baseline = measured.baseline;
            state.line = line_index;
        }
        let cross_size = cross_axis::line_cross_size(items, &line_items, &states);
        lines.push(FlexLine {
            items: line_items,
            cross_offset: 0.0,
            cross_size,
            main_extent: 0.0,
        });
    }

    let content_cross = multi_line::place_lines(container, &mut lines);
    for line in &mut lines {
        cross_axis::align_line_items(items, line, &mut states);
        line.main_extent = main_axis::place_line_items(container, items, &line.items, &mut states);
    }
    let content_main = container.main_size.unwrap_or_else(|| {
        lines
            .iter()
            .map(|line| line.main_extent)
            .fold(0.0f32, f32::max)
    });

    mirror_reversed_axes(container, content_main, content_cross, &mut states);
    build_output(items, lines, states, content_main, content_cross)
}

#[inline]
fn resolve_align(align_self: AlignItems, container: &FlexContainerInputs) -> AlignItems {
    let resolved = align_self.resolve_self(container.align_items);
    if resolved == AlignItems::Baseline && !container.baselines_apply {
        AlignItems::Start
    } else {
        resolved
    }
}

/// Step 5: grow or shrink the items of one line.
fn resolve_line_main_sizes(
    container: &FlexContainerInputs,
    items: &[FlexChild],
    line_items: &[usize],
    states: &mut [ItemState],
) {
    let Some(main_size) = container.main_size else {
        return;
    };
    let children: Vec<FlexChild> = line_items
        .iter()
        .filter_map(|index| items.get(*index).copied())
        .collect();
    let mut sizes: Vec<f32> = children.iter().map(FlexChild::hypothetical_main).collect();
    let outer_total: f32 = children
        .iter()
        .zip(&sizes)
        .map(|(child, size)| size + child.main_margins())
        .sum();
    let gaps = container.main_gap * children.len().saturating_sub(1) as f32;
    let free_space = main_size - outer_total - gaps;
    debug!(
        target: "css::flexbox::flex_lengths",
        "[FLEX-LENGTHS] main_size={main_size:.3} outer_total={outer_total:.3} gaps={gaps:.3} free={free_space:.3}"
    );
    if free_space > 0.0 {
        distribute_grow(free_space, &children, &mut sizes);
    } else if free_space < 0.0 {
        distribute_shrink(free_space, &children, &mut sizes);
    }
    for (index, size) in line_items.iter().zip(sizes) {
        if let Some(state) = states.get_mut(*index) {
            state.main_size = non_negative(size);
        }
    }
}

/// `*-reverse` directions mirror the main axis, `wrap-reverse` the cross axis.
fn mirror_reversed_axes(
    container: &FlexContainerInputs,
    content_main: f32,
    content_cross: f32,
    states: &mut [ItemState],
) {
    let reverse_main = container.direction.is_reverse();
    let reverse_cross = container.wrap == FlexWrap::WrapReverse;
    for state in states {
        if reverse_main {
            state.main_offset = content_main - (state.main_offset + state.main_size);
        }
        if reverse_cross {
            state.cross_offset = content_cross - (state.cross_offset + state.cross_size);
        }
    }
}

fn build_output(
    items: &[FlexChild],
    lines: Vec<FlexLine>,
    states: Vec<ItemState>,
    content_main: f32,
    content_cross: f32,
) -> FlexLayoutOutput {
    let first_baseline = lines
        .first()
        .and_then(|line| cross_axis::line_first_baseline(&line.items, &states));
    let placements = items
        .iter()
        .zip(states)
        .map(|(child, state)| FlexPlacement {
            handle: child.handle,
            main_offset: state.main_offset,
            main_size: state.main_size,
            cross_offset: state.cross_offset,
            cross_size: state.cross_size,
            line: state.line,
            stretched: state.stretched,
        })
        .collect();
    FlexLayoutOutput {
        placements,
        lines,
        content_main,
        content_cross,
        first_baseline,
    }
}
