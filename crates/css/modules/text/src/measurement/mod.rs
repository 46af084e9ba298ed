//! Text measurement boundary.
//!
//! Layout never talks to a font system directly. It is handed a
//! `&dyn TextMeasurer` through the layout context, so independent trees can
//! be laid out on different threads with different measurers.

use crate::style::TextStyle;

/// Measured extents of a run of text on a single line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance in pixels, letter spacing included.
    pub advance: f32,
    /// Distance from the baseline up to the top of the line's glyph box.
    pub ascent: f32,
    /// Distance from the baseline down to the bottom of the glyph box.
    pub descent: f32,
}

/// Measures unwrapped runs of text.
///
/// Implementations must be pure for a given `(text, style)` pair during a layout call.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Width fraction of the font size used for every character.
const APPROX_ADVANCE_RATIO: f32 = 0.6;
const APPROX_ASCENT_RATIO: f32 = 0.8;
const APPROX_DESCENT_RATIO: f32 = 0.2;

/// Fixed-pitch approximation, useful for tests and terminal rendering.
///
/// Every character advances `0.6 × font-size` plus letter spacing between
/// characters; ascent and descent are `0.8` and `0.2` of the font size.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateTextMeasurer;

impl TextMeasurer for ApproximateTextMeasurer {
    #[inline]
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let count = text.chars().count() as f32;
        let spacing = if count > 1.0 {
            (count - 1.0) * style.letter_spacing
        } else {
            0.0
        };
        TextMetrics {
            advance: count.mul_add(style.font_size * APPROX_ADVANCE_RATIO, spacing),
            ascent: style.font_size * APPROX_ASCENT_RATIO,
            descent: style.font_size * APPROX_DESCENT_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test empty text measurement.
    ///
    /// # Panics
    /// Panics if empty text has non-zero width or zero ascent.
    #[test]
    fn test_empty_text() {
        let style = TextStyle {
            font_size: 16.0,
            ..Default::default()
        };
        let metrics = ApproximateTextMeasurer.measure("", &style);
        assert!(metrics.advance.abs() < 0.001);
        assert!(metrics.ascent > 0.0);
    }

    /// # Panics
    /// Panics if letter spacing is not added between characters only.
    #[test]
    fn letter_spacing_between_characters() {
        let style = TextStyle {
            font_size: 10.0,
            letter_spacing: 2.0,
            ..Default::default()
        };
        let metrics = ApproximateTextMeasurer.measure("abcd", &style);
        assert!((metrics.advance - (4.0 * 6.0 + 3.0 * 2.0)).abs() < 0.001);
        assert!((metrics.ascent - 8.0).abs() < 0.001);
        assert!((metrics.descent - 2.0).abs() < 0.001);
    }
}
