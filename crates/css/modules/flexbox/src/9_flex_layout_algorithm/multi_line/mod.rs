//! Line packing on the cross axis (`align-content`).
//!
//! Spec: §9.4 step 15 and §8.4 — <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use super::{FlexContainerInputs, FlexLine};
use crate::chapter8::AlignContent;

/// Offset of the first line and extra spacing between lines for an
/// `align-content` value. Negative free space is treated as zero.
pub fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    content_total: f32,
    line_count: usize,
) -> (f32, f32) {
    let remaining = (container_cross - content_total).max(0.0);
    match (align.resolve(), line_count) {
        (AlignContent::End, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (AlignContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        _ => (0.0, 0.0),
    }
}

/// Size and position lines on the cross axis. Returns the container's inner cross size.
///
/// A single-line container with a definite cross size gives its line that size
/// (or the content's, if larger). Multi-line containers pack lines with
/// `align-content` only when their cross size is definite.
pub(super) fn place_lines(container: &FlexContainerInputs, lines: &mut [FlexLine]) -> f32 {
    let count = lines.len();
    let gaps = container.cross_gap * count.saturating_sub(1) as f32;
    let multi_line = container.wrap.is_multi_line();

    if let (false, Some(definite), Some(line)) =
        (multi_line, container.cross_size, lines.first_mut())
    {
        line.cross_size = line.cross_size.max(definite);
    }

    let mut total: f32 = lines.iter().map(|line| line.cross_size).sum::<f32>() + gaps;
    let (start, between) = match container.cross_size {
        Some(definite) if multi_line => {
            let align = container.align_content.resolve();
            if align == AlignContent::Stretch && count > 0 && definite > total {
                let extra = (definite - total) / count as f32;
                for line in lines.iter_mut() {
                    line.cross_size += extra;
                }
                total = definite;
            }
            align_content_params(align, definite, total, count)
        }
        _ => (0.0, 0.0),
    };

    let mut cursor = start;
    for (position, line) in lines.iter_mut().enumerate() {
        if position > 0 {
            cursor += container.cross_gap + between;
        }
        line.cross_offset = cursor;
        cursor += line.cross_size;
    }
    debug!(
        target: "css::flexbox::multi_line",
        "[FLEX-ALIGN-CONTENT] mode={:?} lines={count} total={total:.3} start={start:.3} between={between:.3}",
        container.align_content
    );
    container.cross_size.unwrap_or(total)
}
