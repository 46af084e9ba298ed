//! CSS Values & Units Level 4 — §6 Distance Units
//! Spec: <https://www.w3.org/TR/css-values-4/#lengths>

use core::fmt;

/// Fallback `ch` advance as a fraction of the font size when no measurement is available.
const CH_FALLBACK_RATIO: f32 = 0.6;

/// Units of a CSS `<length>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthUnit {
    #[default]
    Pixels,
    /// 1pt = 1/72in
    Points,
    /// 1pc = 12pt
    Picas,
    /// 1in = 96px
    Inches,
    /// 1cm = 96px / 2.54
    Centimeters,
    /// 1mm = 1/10cm
    Millimeters,
    /// 1Q = 1/40cm
    QuarterMillimeters,
    Ems,
    RootEms,
    /// Advance of the reference glyph (`0`).
    Ch,
    ViewportWidth,
    ViewportHeight,
    ViewportMin,
    ViewportMax,
}

impl LengthUnit {
    /// Suffix as written in CSS.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Points => "pt",
            Self::Picas => "pc",
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::QuarterMillimeters => "Q",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::Ch => "ch",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
        }
    }

    /// Pixels per unit for the absolute units, `None` for relative ones.
    ///
    /// Spec: §6.2 Absolute Lengths
    pub const fn absolute_px_per_unit(self) -> Option<f32> {
        match self {
            Self::Pixels => Some(1.0),
            Self::Points => Some(96.0 / 72.0),
            Self::Picas => Some(16.0),
            Self::Inches => Some(96.0),
            Self::Centimeters => Some(96.0 / 2.54),
            Self::Millimeters => Some(96.0 / 25.4),
            Self::QuarterMillimeters => Some(96.0 / 101.6),
            Self::Ems
            | Self::RootEms
            | Self::Ch
            | Self::ViewportWidth
            | Self::ViewportHeight
            | Self::ViewportMin
            | Self::ViewportMax => None,
        }
    }
}

/// Environment needed to turn relative lengths into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthContext {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub root_font_size: f32,
    /// Glyph whose advance defines `1ch`.
    pub ch_reference_char: char,
}

impl Default for LengthContext {
    #[inline]
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            root_font_size: 16.0,
            ch_reference_char: '0',
        }
    }
}

/// A CSS `<length>` value with unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    #[inline]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Pixels)
    }

    #[inline]
    pub const fn pt(value: f32) -> Self {
        Self::new(value, LengthUnit::Points)
    }

    #[inline]
    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Ems)
    }

    #[inline]
    pub const fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::RootEms)
    }

    #[inline]
    pub const fn ch(value: f32) -> Self {
        Self::new(value, LengthUnit::Ch)
    }

    #[inline]
    pub const fn vw(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportWidth)
    }

    #[inline]
    pub const fn vh(value: f32) -> Self {
        Self::new(value, LengthUnit::ViewportHeight)
    }

    /// Resolve to CSS pixels.
    ///
    /// `font_size` is the element's computed font size (for `em`/`ch`).
    /// `ch_advance` is the measured advance of the reference glyph at that
    /// font size; when absent `1ch` falls back to `0.6em`.
    pub fn resolve(self, ctx: &LengthContext, font_size: f32, ch_advance: Option<f32>) -> f32 {
        if let Some(scale) = self.unit.absolute_px_per_unit() {
            return self.value * scale;
        }
        match self.unit {
            LengthUnit::Ems => self.value * font_size,
            LengthUnit::RootEms => self.value * ctx.root_font_size,
            LengthUnit::Ch => {
                let advance = ch_advance
                    .filter(|measured| *measured > 0.0)
                    .unwrap_or(font_size * CH_FALLBACK_RATIO);
                self.value * advance
            }
            LengthUnit::ViewportWidth => self.value * ctx.viewport_width / 100.0,
            LengthUnit::ViewportHeight => self.value * ctx.viewport_height / 100.0,
            LengthUnit::ViewportMin => {
                self.value * ctx.viewport_width.min(ctx.viewport_height) / 100.0
            }
            LengthUnit::ViewportMax => {
                self.value * ctx.viewport_width.max(ctx.viewport_height) / 100.0
            }
            LengthUnit::Pixels
            | LengthUnit::Points
            | LengthUnit::Picas
            | LengthUnit::Inches
            | LengthUnit::Centimeters
            | LengthUnit::Millimeters
            | LengthUnit::QuarterMillimeters => self.value,
        }
    }
}

impl From<f32> for Length {
    #[inline]
    fn from(value: f32) -> Self {
        Self::px(value)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}{}", self.value, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f32, right: f32) -> bool {
        (left - right).abs() < 0.001
    }

    /// # Panics
    /// Panics if an absolute unit does not convert at the CSS reference ratio.
    #[test]
    fn absolute_units_convert_to_px() {
        let ctx = LengthContext::default();
        assert!(close(Length::pt(72.0).resolve(&ctx, 16.0, None), 96.0));
        assert!(close(Length::new(1.0, LengthUnit::Picas).resolve(&ctx, 16.0, None), 16.0));
        assert!(close(Length::new(2.54, LengthUnit::Centimeters).resolve(&ctx, 16.0, None), 96.0));
        assert!(close(Length::new(25.4, LengthUnit::Millimeters).resolve(&ctx, 16.0, None), 96.0));
        assert!(close(
            Length::new(101.6, LengthUnit::QuarterMillimeters).resolve(&ctx, 16.0, None),
            96.0
        ));
    }

    /// # Panics
    /// Panics if font- or viewport-relative units ignore their context.
    #[test]
    fn relative_units_use_context() {
        let ctx = LengthContext {
            viewport_width: 1000.0,
            viewport_height: 500.0,
            root_font_size: 10.0,
            ch_reference_char: '0',
        };
        assert!(close(Length::em(2.0).resolve(&ctx, 12.0, None), 24.0));
        assert!(close(Length::rem(2.0).resolve(&ctx, 12.0, None), 20.0));
        assert!(close(Length::vw(10.0).resolve(&ctx, 12.0, None), 100.0));
        assert!(close(Length::vh(10.0).resolve(&ctx, 12.0, None), 50.0));
        assert!(close(Length::new(10.0, LengthUnit::ViewportMin).resolve(&ctx, 12.0, None), 50.0));
        assert!(close(Length::new(10.0, LengthUnit::ViewportMax).resolve(&ctx, 12.0, None), 100.0));
    }

    /// # Panics
    /// Panics if `ch` does not prefer the measured advance over the fallback.
    #[test]
    fn ch_uses_measurement_then_fallback() {
        let ctx = LengthContext::default();
        assert!(close(Length::ch(2.0).resolve(&ctx, 10.0, Some(7.0)), 14.0));
        assert!(close(Length::ch(2.0).resolve(&ctx, 10.0, None), 12.0));
        assert!(close(Length::ch(2.0).resolve(&ctx, 10.0, Some(0.0)), 12.0));
    }

    /// # Panics
    /// Panics if the display form drops the unit suffix.
    #[test]
    fn display_includes_suffix() {
        assert_eq!(Length::rem(1.5).to_string(), "1.50rem");
        assert_eq!(Length::new(3.0, LengthUnit::QuarterMillimeters).to_string(), "3.00Q");
    }
}
