//! Main-axis placement within a line: auto margins, then `justify-content`.
//!
//! Spec: §9.5 Main-Axis Alignment

mod auto_margins;

use log::debug;

use super::{FlexChild, FlexContainerInputs, ItemState};
use crate::chapter8::JustifyContent;

use auto_margins::resolve_auto_margins;

/// Offset of the first item and extra spacing between adjacent items for a
/// `justify-content` value. Negative free space is treated as zero.
pub fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let remaining = (container_main - content_total).max(0.0);
    match (justify.resolve(), item_count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        _ => (0.0, 0.0),
    }
}

/// Set `main_offset` for every item of a line. Returns Σ outer sizes + gaps.
pub(super) fn place_line_items(
    container: &FlexContainerInputs,
    items: &[FlexChild],
    line_items: &[usize],
    states: &mut [ItemState],
) -> f32 {
    let count = line_items.len();
    let gaps = container.main_gap * count.saturating_sub(1) as f32;
    let outer_total: f32 = line_items
        .iter()
        .filter_map(|index| Some(items.get(*index)?.main_margins() + states.get(*index)?.main_size))
        .sum();
    let extent = outer_total + gaps;
    let container_main = container.main_size.unwrap_or(extent);
    let free_space = container_main - extent;

    let auto = resolve_auto_margins(items, line_items, free_space);
    let (start, between) = if auto.slots > 0 && free_space > 0.0 {
        (0.0, 0.0)
    } else {
        justify_params(container.justify_content, container_main, extent, count)
    };
    debug!(
        target: "css::flexbox::main",
        "[FLEX-MAIN] justify={:?} free={free_space:.3} auto_slots={} start={start:.3} between={between:.3}",
        container.justify_content,
        auto.slots
    );

    let mut cursor = start;
    for (position, &index) in line_items.iter().enumerate() {
        let (Some(child), Some(state)) = (items.get(index), states.get_mut(index)) else {
            continue;
        };
        if position > 0 {
            cursor += container.main_gap + between;
        }
        let (extra_start, extra_end) = auto.extra_for(child);
        state.main_offset = cursor + child.margin_main_start + extra_start;
        cursor = state.main_offset + state.main_size + child.margin_main_end + extra_end;
    }
    extent
}
