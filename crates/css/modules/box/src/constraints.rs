//! Min/max box constraints passed from a parent to a child.

use crate::clamp::{UNBOUNDED, clamp_min_max, is_definite, non_negative};
use crate::geometry::Size;

/// Per-axis `[min, max]` limits for a box's border-box size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for Constraints {
    #[inline]
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl Constraints {
    /// Exactly `width` × `height`.
    #[inline]
    pub const fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to `max_width` × `max_height`.
    #[inline]
    pub const fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// No limit on either axis.
    #[inline]
    pub const fn unconstrained() -> Self {
        Self::loose(UNBOUNDED, UNBOUNDED)
    }

    /// Clamp each axis of `size` into this constraint.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: clamp_min_max(non_negative(size.width), self.min_width, self.max_width),
            height: clamp_min_max(non_negative(size.height), self.min_height, self.max_height),
        }
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        is_definite(self.max_width)
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        is_definite(self.max_height)
    }

    /// True when both min and max agree on the width.
    #[inline]
    pub fn is_tight_width(&self) -> bool {
        self.has_bounded_width() && (self.max_width - self.min_width).abs() < f32::EPSILON
    }

    /// True when both min and max agree on the height.
    #[inline]
    pub fn is_tight_height(&self) -> bool {
        self.has_bounded_height() && (self.max_height - self.min_height).abs() < f32::EPSILON
    }

    /// Remove padding+border from both limits, yielding content-box constraints.
    #[inline]
    pub fn deflate(&self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: non_negative(self.min_width - horizontal),
            max_width: non_negative(self.max_width - horizontal),
            min_height: non_negative(self.min_height - vertical),
            max_height: non_negative(self.max_height - vertical),
        }
    }

    /// Drop the minimums, keeping only the maximums.
    #[inline]
    pub const fn loosen(&self) -> Self {
        Self::loose(self.max_width, self.max_height)
    }

    /// Largest allowed size (may be unbounded on either axis).
    #[inline]
    pub const fn max_size(&self) -> Size {
        Size {
            width: self.max_width,
            height: self.max_height,
        }
    }

    /// Swap the axes, used when the main axis of an algorithm is vertical.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self {
            min_width: self.min_height,
            max_width: self.max_height,
            min_height: self.min_width,
            max_height: self.max_width,
        }
    }
}
