//! Text properties consumed by line layout.

use crate::default_font_size_px;

/// `white-space`
///
/// Spec: §3 White Space and Wrapping
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Nowrap,
    Pre,
    PreWrap,
    PreLine,
}

impl WhiteSpace {
    /// Whether soft wrap opportunities may be taken.
    #[inline]
    pub const fn wraps(self) -> bool {
        matches!(self, Self::Normal | Self::PreWrap | Self::PreLine)
    }

    /// Whether spaces and tabs are kept as written.
    #[inline]
    pub const fn preserves_spaces(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap)
    }

    /// Whether segment breaks (`\n`) force a new line.
    #[inline]
    pub const fn preserves_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap | Self::PreLine)
    }
}

/// `text-align`
///
/// Spec: §7.1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
}

/// `overflow-wrap`
///
/// Spec: §5.5
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowWrap {
    #[default]
    Normal,
    /// Unbreakable words wider than the line may be split anywhere.
    BreakWord,
}

/// `line-height`
///
/// Spec: CSS Inline Layout §4.4
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineHeight {
    /// `normal`, 1.2 × font size.
    #[default]
    Normal,
    /// Unitless multiplier of the font size.
    Number(f32),
    /// Absolute height in pixels.
    Px(f32),
}

impl LineHeight {
    /// Resolve to pixels for the given font size.
    #[inline]
    pub fn resolve(self, font_size: f32) -> f32 {
        match self {
            Self::Normal => font_size * 1.2,
            Self::Number(factor) if factor > 0.0 => font_size * factor,
            Self::Px(height) if height > 0.0 => height,
            Self::Number(_) | Self::Px(_) => font_size * 1.2,
        }
    }
}

/// Text style for a text leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    /// Family name handed to the measurer; empty means the measurer's default.
    pub font_family: String,
    pub line_height: LineHeight,
    /// Extra space between characters, in pixels.
    pub letter_spacing: f32,
    /// Extra space added to every inter-word space, in pixels.
    pub word_spacing: f32,
    /// First-line indent in pixels (negative for a hanging indent).
    pub text_indent: f32,
    pub text_align: TextAlign,
    pub white_space: WhiteSpace,
    pub overflow_wrap: OverflowWrap,
}

impl Default for TextStyle {
    #[inline]
    fn default() -> Self {
        Self {
            font_size: default_font_size_px(),
            font_family: String::new(),
            line_height: LineHeight::Normal,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            text_indent: 0.0,
            text_align: TextAlign::Start,
            white_space: WhiteSpace::Normal,
            overflow_wrap: OverflowWrap::Normal,
        }
    }
}

impl TextStyle {
    /// Resolved line height in pixels.
    #[inline]
    pub fn line_height_px(&self) -> f32 {
        self.line_height.resolve(self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if line-height resolution does not match `normal`, multiplier and px forms.
    #[test]
    fn line_height_forms() {
        assert!((LineHeight::Normal.resolve(10.0) - 12.0).abs() < 0.001);
        assert!((LineHeight::Number(1.5).resolve(10.0) - 15.0).abs() < 0.001);
        assert!((LineHeight::Px(22.0).resolve(10.0) - 22.0).abs() < 0.001);
        assert!((LineHeight::Px(-3.0).resolve(10.0) - 12.0).abs() < 0.001);
    }
}
