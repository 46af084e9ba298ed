//! Spec: CSS Box Sizing L4 §5 Aspect Ratios
//! <https://www.w3.org/TR/css-sizing-4/#aspect-ratio>

use css_box::clamp::is_definite;
use css_writing_modes::WritingMode;

use super::UsedAxis;
use crate::chapter8::AxisLimits;

/// Turn a physical width / height ratio into an inline / block ratio.
///
/// Zero, negative and non-finite ratios are ignored.
pub fn logical_ratio(ratio: Option<f32>, mode: WritingMode) -> Option<f32> {
    ratio
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| if mode.is_vertical() { value.recip() } else { value })
}

/// Derive the missing axis from the ratio, then apply min/max without
/// breaking it.
///
/// The inline size is resolved first; a filled inline size whose block size
/// would overflow a bounded `available_block` is shrunk to fit. When both
/// axes are auto nothing is known yet and the block size follows the content
/// inline size later.
pub fn apply_aspect_ratio(
    (inline, inline_limits): (UsedAxis, AxisLimits),
    (block, block_limits): (UsedAxis, AxisLimits),
    ratio: f32,
    available_block: f32,
) -> (Option<f32>, Option<f32>) {
    let (mut inline_size, mut block_size) = match (inline, block) {
        (UsedAxis::Auto, UsedAxis::Auto | UsedAxis::Fill(_)) => return (None, None),
        (
            UsedAxis::Forced(_) | UsedAxis::Declared(_),
            UsedAxis::Forced(_) | UsedAxis::Declared(_),
        ) => return (inline.settle(inline_limits), block.settle(block_limits)),
        (
            UsedAxis::Auto | UsedAxis::Fill(_),
            UsedAxis::Forced(given) | UsedAxis::Declared(given),
        ) => (given * ratio, given),
        (UsedAxis::Fill(given), UsedAxis::Auto | UsedAxis::Fill(_)) => {
            let derived = given / ratio;
            if is_definite(available_block) && derived > available_block {
                (available_block * ratio, available_block)
            } else {
                (given, derived)
            }
        }
        (
            UsedAxis::Forced(given) | UsedAxis::Declared(given),
            UsedAxis::Auto | UsedAxis::Fill(_),
        ) => (given, given / ratio),
    };
    if !matches!(inline, UsedAxis::Forced(_)) {
        let clamped = inline_limits.clamp(inline_size);
        if (clamped - inline_size).abs() > f32::EPSILON {
            inline_size = clamped;
            block_size = clamped / ratio;
        }
    }
    if !matches!(block, UsedAxis::Forced(_)) {
        let clamped = block_limits.clamp(block_size);
        if (clamped - block_size).abs() > f32::EPSILON {
            block_size = clamped;
            inline_size = clamped * ratio;
        }
    }
    (Some(inline_size), Some(block_size))
}
