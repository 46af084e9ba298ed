//! CSS Box Sizing Level 3 — §3 sizing keywords accepted by `width`/`height`.
//! Spec: <https://www.w3.org/TR/css-sizing-3/#sizing-values>

use crate::Length;

/// Value of a `width`, `height`, `min-*`, `max-*` or `flex-basis` property.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dimension {
    #[default]
    Auto,
    Length(Length),
    MinContent,
    MaxContent,
    /// `fit-content` or `fit-content(<length>)`.
    FitContent(Option<Length>),
}

impl Dimension {
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::Length(Length::px(value))
    }

    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// True for the content-based keywords.
    #[inline]
    pub const fn is_intrinsic(&self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::FitContent(_))
    }

    /// The length, if this is one.
    #[inline]
    pub const fn length(&self) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            Self::Auto | Self::MinContent | Self::MaxContent | Self::FitContent(_) => None,
        }
    }
}

impl From<Length> for Dimension {
    #[inline]
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<f32> for Dimension {
    #[inline]
    fn from(value: f32) -> Self {
        Self::px(value)
    }
}
