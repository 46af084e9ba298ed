//! Collecting flex items into flex lines.
//!
//! Spec: §9.3 step 5 — <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::FlexChild;

/// Half-open range of positions in the visual order that form one line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Break items (taken in `visual_order`) into lines no longer than `limit`.
///
/// An item starts a new line when adding it (plus the main gap) would overflow
/// the current one; a line always holds at least one item. Single-line
/// containers and unbounded limits produce exactly one line.
pub fn break_into_lines(
    items: &[FlexChild],
    visual_order: &[usize],
    limit: f32,
    main_gap: f32,
    multi_line: bool,
) -> Vec<LineRange> {
    if visual_order.is_empty() {
        return Vec::new();
    }
    if !multi_line || !limit.is_finite() {
        return vec![LineRange {
            start: 0,
            end: visual_order.len(),
        }];
    }
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut used = 0.0f32;
    for (position, index) in visual_order.iter().enumerate() {
        let Some(child) = items.get(*index) else {
            continue;
        };
        let outer = child.hypothetical_main() + child.main_margins();
        let count = position - start;
        let needed = if count == 0 { outer } else { used + main_gap + outer };
        if count > 0 && needed > limit {
            debug!(
                target: "css::flexbox::lines",
                "[FLEX-LINES] break before position {position}: needed={needed:.3} limit={limit:.3}"
            );
            lines.push(LineRange {
                start,
                end: position,
            });
            start = position;
            used = outer;
        } else {
            used = needed;
        }
    }
    lines.push(LineRange {
        start,
        end: visual_order.len(),
    });
    lines
}
