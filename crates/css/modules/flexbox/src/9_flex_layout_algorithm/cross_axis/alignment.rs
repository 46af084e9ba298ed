//! Cross-axis offsets for non-baseline alignment values.

use css_box::clamp::{clamp_min_max, non_negative};

use super::super::FlexChild;
use crate::chapter8::AlignItems;

/// Offset of an item's border box from the start of its line.
#[inline]
pub fn cross_offset_in_line(
    align: AlignItems,
    line_cross: f32,
    item_cross: f32,
    child: &FlexChild,
) -> f32 {
    match align {
        AlignItems::End => line_cross - item_cross - child.margin_cross_end,
        AlignItems::Center => {
            (line_cross - (item_cross + child.cross_margins())) / 2.0 + child.margin_cross_start
        }
        AlignItems::Start | AlignItems::Stretch | AlignItems::Baseline | AlignItems::Unset => {
            child.margin_cross_start
        }
    }
}

/// Line cross size minus the item's margins, clamped by its min/max cross size.
#[inline]
pub fn stretched_cross_size(child: &FlexChild, line_cross: f32) -> f32 {
    clamp_min_max(
        non_negative(line_cross - child.cross_margins()),
        child.min_cross,
        child.max_cross,
    )
}
