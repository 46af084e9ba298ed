//! Auto margins on the main axis absorb positive free space before justification.
//!
//! Spec: §8.1 — <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use super::super::FlexChild;

/// Share of free space given to each auto margin slot on a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AutoMarginShare {
    pub slots: usize,
    pub each: f32,
}

impl AutoMarginShare {
    /// Extra `(start, end)` margin for one item.
    #[inline]
    pub fn extra_for(self, child: &FlexChild) -> (f32, f32) {
        let start = if child.margin_main_start_auto { self.each } else { 0.0 };
        let end = if child.margin_main_end_auto { self.each } else { 0.0 };
        (start, end)
    }
}

/// Split positive free space evenly across the auto margins of a line.
/// Negative free space leaves auto margins at zero.
pub fn resolve_auto_margins(
    items: &[FlexChild],
    line_items: &[usize],
    free_space: f32,
) -> AutoMarginShare {
    let slots = line_items
        .iter()
        .filter_map(|index| items.get(*index))
        .map(|child| {
            usize::from(child.margin_main_start_auto) + usize::from(child.margin_main_end_auto)
        })
        .sum();
    let each = if slots > 0 && free_space > 0.0 {
        free_space / slots as f32
    } else {
        0.0
    };
    AutoMarginShare { slots, each }
}
