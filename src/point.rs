use core::ops::{Add, Sub};

use crate::Size;

/// 2D position in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounds both components to their closest whole-number value.
    ///
    /// Halfway cases round away from zero (`0.5 -> 1`, `-0.5 -> -1`).
    #[inline]
    #[must_use]
    pub fn integral(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Origin at which a box of size `inner` sits centered within `outer`.
    ///
    /// The result is integral. Negative components are valid when `inner`
    /// is larger than `outer`.
    #[inline]
    #[must_use]
    pub fn centered(inner: Size, outer: Size) -> Self {
        Self::new(
            (outer.width - inner.width) / 2.0,
            (outer.height - inner.height) / 2.0,
        )
        .integral()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
