//! Alignment — justify-content, align-items/align-self, align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>
//!
//! Every property carries an explicit `Unset` so "not specified" is never
//! confused with a real keyword; [`JustifyContent::resolve`] and friends are
//! the only places the CSS initial values are applied.

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Unset,
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Initial value is `flex-start`.
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Unset => Self::Start,
            other => other,
        }
    }
}

/// `align-items`, and `align-self` where `Unset` means `auto`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Unset,
    Start,
    End,
    Center,
    Baseline,
    Stretch,
}

impl AlignItems {
    /// Initial value of `align-items` is `stretch`.
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Unset => Self::Stretch,
            other => other,
        }
    }

    /// Resolve an item's `align-self` against the container's `align-items`.
    #[inline]
    pub const fn resolve_self(self, container: Self) -> Self {
        match self {
            Self::Unset => container.resolve(),
            other => other,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    #[default]
    Unset,
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}

impl AlignContent {
    /// Initial value is `stretch`.
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Unset => Self::Stretch,
            other => other,
        }
    }
}
