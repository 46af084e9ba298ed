//! CSS Box Model Module Level 3 — Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Also home of the geometry/constraint primitives and the clamping policy
//! used by every layout algorithm in the workspace.

pub mod clamp;
mod constraints;
mod geometry;

pub use clamp::UNBOUNDED;
pub use constraints::Constraints;
pub use geometry::{Point, Rect, Size};

/// Four physical edge values (margin, padding or border widths).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self::all(0.0);

    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[inline]
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// left + right
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// top + bottom
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    fn non_negative(self) -> Self {
        Self {
            top: clamp::non_negative(self.top),
            right: clamp::non_negative(self.right),
            bottom: clamp::non_negative(self.bottom),
            left: clamp::non_negative(self.left),
        }
    }
}

/// `box-sizing`: whether declared sizes describe the content box or the border box.
///
/// Spec: CSS Box Sizing L3 §3
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Box edges used by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSides {
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
}

impl BoxSides {
    /// Padding plus border on the left and right.
    #[inline]
    pub fn horizontal_inset(&self) -> f32 {
        self.padding.horizontal() + self.border.horizontal()
    }

    /// Padding plus border on the top and bottom.
    #[inline]
    pub fn vertical_inset(&self) -> f32 {
        self.padding.vertical() + self.border.vertical()
    }

    /// Offset of the content box from the border-box origin.
    #[inline]
    pub fn content_origin(&self) -> Point {
        Point::new(
            self.padding.left + self.border.left,
            self.padding.top + self.border.top,
        )
    }

    /// Convert a declared width into a content-box width.
    #[inline]
    pub fn content_width(&self, declared: f32, sizing: BoxSizing) -> f32 {
        content_from_declared(declared, self.horizontal_inset(), sizing)
    }

    /// Convert a declared height into a content-box height.
    #[inline]
    pub fn content_height(&self, declared: f32, sizing: BoxSizing) -> f32 {
        content_from_declared(declared, self.vertical_inset(), sizing)
    }
}

/// Resolve margin/padding/border widths into `BoxSides`.
///
/// Padding and border widths are clamped to be non-negative. Margins can be negative.
/// Spec: CSS 2.2 §8.1 (box model) and CSS Box Sizing L3.
pub fn compute_box_sides(margin: Edges, padding: Edges, border: Edges) -> BoxSides {
    BoxSides {
        margin,
        padding: padding.non_negative(),
        border: border.non_negative(),
    }
}

/// Turn a declared size into a content-box size.
///
/// Under `border-box` the padding+border `inset` is removed. The result never goes negative.
#[inline]
pub fn content_from_declared(declared: f32, inset: f32, sizing: BoxSizing) -> f32 {
    match sizing {
        BoxSizing::ContentBox => clamp::non_negative(declared),
        BoxSizing::BorderBox => clamp::non_negative(declared - inset),
    }
}
