//! Points, sizes and rectangles in CSS pixels.

/// A 2D point in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the given amounts (used to go from content-box to border-box).
    #[inline]
    pub fn inflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            width: self.width + horizontal,
            height: self.height + vertical,
        }
    }

    /// Shrink both axes by the given amounts, never going below zero.
    #[inline]
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            width: (self.width - horizontal).max(0.0),
            height: (self.height - vertical).max(0.0),
        }
    }

    /// Swap width and height; used when an axis is mapped onto the other one.
    #[inline]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Width / height, or `None` when the height is zero.
    #[inline]
    pub fn ratio(self) -> Option<f32> {
        (self.height > 0.0).then(|| self.width / self.height)
    }
}

/// An axis-aligned rectangle.
///
/// Layout always writes rectangles relative to the parent's content-box origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move the rectangle by the given offsets.
    #[inline]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// True when the two rectangles share a non-empty area.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if deflation goes negative or inflation does not add both axes.
    #[test]
    fn deflate_clamps_and_inflate_adds() {
        let size = Size::new(10.0, 4.0);
        let shrunk = size.deflate(12.0, 2.0);
        assert!(shrunk.width.abs() < 0.001);
        assert!((shrunk.height - 2.0).abs() < 0.001);
        let grown = shrunk.inflate(12.0, 2.0);
        assert!((grown.width - 12.0).abs() < 0.001);
        assert!((grown.height - 4.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if edge-touching rectangles are reported as intersecting.
    #[test]
    fn touching_rects_do_not_intersect() {
        let left = Rect::new(0.0, 0.0, 50.0, 50.0);
        let right = Rect::new(50.0, 0.0, 50.0, 50.0);
        let overlapping = Rect::new(49.0, 10.0, 5.0, 5.0);
        assert!(!left.intersects(&right));
        assert!(left.intersects(&overlapping));
        assert!(right.intersects(&overlapping));
    }

    /// # Panics
    /// Panics if the ratio of a zero-height size is defined.
    #[test]
    fn ratio_requires_height() {
        assert_eq!(Size::new(10.0, 0.0).ratio(), None);
        let ratio = Size::new(16.0, 9.0).ratio().unwrap_or_default();
        assert!((ratio - 16.0 / 9.0).abs() < 0.001);
    }
}
