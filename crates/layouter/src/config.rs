//! Viewport and font settings for a layout pass.

use anyhow::{Context as _, Result, ensure};
use css_core::{Constraints, Size};
use css_values_units::LengthContext;
use serde::{Deserialize, Serialize};
use serde_json::from_str;

/// Settings shared by every pass of a [`Layouter`](crate::Layouter).
///
/// Fields missing from a serialized config keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Containing block of `position: fixed` boxes and base of `vw`.
    pub viewport_width: f32,
    /// Base of `vh`.
    pub viewport_height: f32,
    /// Base of `rem`.
    pub root_font_size: f32,
    /// Glyph whose advance defines `1ch`.
    pub ch_reference_char: char,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let lengths = LengthContext::default();
        Self {
            viewport_width: lengths.viewport_width,
            viewport_height: lengths.viewport_height,
            root_font_size: lengths.root_font_size,
            ch_reference_char: lengths.ch_reference_char,
        }
    }
}

impl LayoutConfig {
    /// A config for the given viewport with default font settings.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    /// Returns an error if `json` is not a config object or if a value is
    /// out of range (see [`LayoutConfig::validate`]).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = from_str(json).context("failed to parse layout config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the viewport is finite and non-negative and the root font
    /// size is positive.
    ///
    /// # Errors
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.viewport_width.is_finite() && self.viewport_width >= 0.0,
            "viewport_width must be a finite, non-negative number (got {})",
            self.viewport_width
        );
        ensure!(
            self.viewport_height.is_finite() && self.viewport_height >= 0.0,
            "viewport_height must be a finite, non-negative number (got {})",
            self.viewport_height
        );
        ensure!(
            self.root_font_size.is_finite() && self.root_font_size > 0.0,
            "root_font_size must be positive (got {})",
            self.root_font_size
        );
        Ok(())
    }

    pub const fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// Root constraints: anything up to the viewport.
    pub const fn constraints(&self) -> Constraints {
        Constraints::loose(self.viewport_width, self.viewport_height)
    }

    pub const fn length_context(&self) -> LengthContext {
        LengthContext {
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            root_font_size: self.root_font_size,
            ch_reference_char: self.ch_reference_char,
        }
    }
}

impl From<LayoutConfig> for LengthContext {
    fn from(config: LayoutConfig) -> Self {
        config.length_context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_text(json: &str) -> Option<String> {
        LayoutConfig::from_json_str(json)
            .err()
            .map(|error| format!("{error:#}"))
    }

    /// # Panics
    /// Panics if the defaults differ from the length context defaults.
    #[test]
    fn defaults_match_length_context() {
        let config = LayoutConfig::default();
        assert_eq!(config.length_context(), LengthContext::default());
        assert!((config.viewport_width - 800.0).abs() < 0.001);
        assert!((config.viewport_height - 600.0).abs() < 0.001);
        assert!((config.root_font_size - 16.0).abs() < 0.001);
        assert_eq!(config.ch_reference_char, '0');
    }

    /// # Panics
    /// Panics if missing fields do not fall back to their defaults.
    #[test]
    fn partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json_str(r#"{ "viewport_width": 1024 }"#);
        assert!(config.as_ref().is_ok_and(|parsed| {
            (parsed.viewport_width - 1024.0).abs() < 0.001
                && (parsed.viewport_height - 600.0).abs() < 0.001
                && parsed.ch_reference_char == '0'
        }));
    }

    /// # Panics
    /// Panics if malformed or out-of-range configs are accepted.
    #[test]
    fn rejects_bad_configs() {
        assert!(error_text("[1, 2]").is_some_and(|text| text.contains("layout config")));
        assert!(
            error_text(r#"{ "viewport_height": -1 }"#)
                .is_some_and(|text| text.contains("viewport_height"))
        );
        assert!(
            error_text(r#"{ "root_font_size": 0 }"#)
                .is_some_and(|text| text.contains("root_font_size"))
        );
    }

    /// # Panics
    /// Panics if the root constraints are not bounded by the viewport.
    #[test]
    fn constraints_follow_viewport() {
        let config = LayoutConfig::with_viewport(320.0, 240.0);
        assert_eq!(config.constraints(), Constraints::loose(320.0, 240.0));
        assert_eq!(config.viewport(), Size::new(320.0, 240.0));
        assert!((LengthContext::from(config).viewport_width - 320.0).abs() < 0.001);
    }
}
