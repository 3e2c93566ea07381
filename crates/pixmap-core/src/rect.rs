//! Rect - Inclusive rectangle regions
//!
//! Unlike a width/height box, a `Rect` stores both corners and both are
//! inside the region: a rect with `x0 == x1` is one pixel wide.

/// An inclusive axis-aligned rectangle
///
/// This is a small `Copy` value; functions that need to adjust a rect take
/// it by `&mut` or return a new one, never share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left column (inclusive)
    pub x0: i32,
    /// Top row (inclusive)
    pub y0: i32,
    /// Right column (inclusive)
    pub x1: i32,
    /// Bottom row (inclusive)
    pub y1: i32,
}

impl Rect {
    /// Create a rect from its two inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rect from an origin and a size.
    ///
    /// A non-positive `w` or `h` yields a null rect. Corners that would
    /// fall outside the `i32` range are clamped to it.
    pub const fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: saturate(x as i64 + w as i64 - 1),
            y1: saturate(y as i64 + h as i64 - 1),
        }
    }

    /// Number of columns covered, `x1 - x0 + 1`.
    ///
    /// Saturates at the `i32` bounds; use [`Rect::extent`] for the exact
    /// value of rects wider than `i32::MAX`.
    #[inline]
    pub const fn width(&self) -> i32 {
        saturate(self.extent().0)
    }

    /// Number of rows covered, `y1 - y0 + 1`.
    ///
    /// Saturates like [`Rect::width`].
    #[inline]
    pub const fn height(&self) -> i32 {
        saturate(self.extent().1)
    }

    /// Exact width and height, computed in 64 bits.
    ///
    /// Never overflows, and is non-positive along an axis where the rect
    /// is null.
    #[inline]
    pub const fn extent(&self) -> (i64, i64) {
        (
            self.x1 as i64 - self.x0 as i64 + 1,
            self.y1 as i64 - self.y0 as i64 + 1,
        )
    }

    /// Check if both extents fit in an `i32`.
    #[inline]
    pub const fn fits_i32(&self) -> bool {
        let (w, h) = self.extent();
        w <= i32::MAX as i64 && h <= i32::MAX as i64
    }

    /// Resize horizontally, keeping `x0` fixed.
    #[inline]
    pub fn set_width(&mut self, w: i32) {
        self.x1 = saturate(i64::from(self.x0) + i64::from(w) - 1);
    }

    /// Resize vertically, keeping `y0` fixed.
    #[inline]
    pub fn set_height(&mut self, h: i32) {
        self.y1 = saturate(i64::from(self.y0) + i64::from(h) - 1);
    }

    /// Check if the rect covers no pixels.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Check if a point is inside the rect.
    #[inline]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check if the rect lies entirely inside a `width` x `height` buffer.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        !self.is_null()
            && self.x0 >= 0
            && self.y0 >= 0
            && i64::from(self.x1) < i64::from(width)
            && i64::from(self.y1) < i64::from(height)
    }

    /// Translate the rect by (dx, dy), clamping corners to the `i32` range.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x0: saturate(self.x0 as i64 + dx as i64),
            y0: saturate(self.y0 as i64 + dy as i64),
            x1: saturate(self.x1 as i64 + dx as i64),
            y1: saturate(self.y1 as i64 + dy as i64),
        }
    }

    /// Width and height as a pair.
    #[inline]
    pub const fn size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }
}

const fn saturate(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}
