use crate::{Alignment, Origin, Point, Size};

/// Axis-aligned rectangle in logical pixels.
///
/// Whether the origin means top-left or bottom-left is decided by the ambient
/// coordinate system, not by the rect itself; only the alignment functions
/// care about the distinction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    // ── component replacement ─────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_origin_x(self, x: f32) -> Self {
        Self { origin: Point::new(x, self.origin.y), ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_origin_y(self, y: f32) -> Self {
        Self { origin: Point::new(self.origin.x, y), ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_width(self, width: f32) -> Self {
        Self { size: Size::new(width, self.size.height), ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_height(self, height: f32) -> Self {
        Self { size: Size::new(self.size.width, height), ..self }
    }

    // ── snapping, scaling, placement ──────────────────────────────────────

    /// Rounds origin and size to their closest whole-number values.
    ///
    /// Each of the four components rounds independently, halfway cases away
    /// from zero.
    #[inline]
    #[must_use]
    pub fn integral(self) -> Self {
        Self {
            origin: self.origin.integral(),
            size: self.size.integral(),
        }
    }

    /// Scales the size by `sx`/`sy` and snaps the whole rect to integral.
    ///
    /// The origin is not scaled, but it does go through the final integral
    /// pass along with the size.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        self.with_size(self.size.scale(sx, sy)).integral()
    }

    /// Moves this rect so it sits centered within `outer`.
    ///
    /// Size is unchanged; the new origin is integral.
    #[inline]
    #[must_use]
    pub fn center_in(self, outer: Rect) -> Self {
        self.with_origin(Point::centered(self.size, outer.size))
    }

    /// Pins this rect against the edges of `outer` named by `alignment`,
    /// resolving vertical direction through `origin`.
    ///
    /// Origin components whose edges are not in the mask keep their current
    /// value. `BOTTOM` overrides `TOP` and `RIGHT` overrides `LEFT` when both
    /// are set. No bounds checking: a rect larger than `outer` aligns to
    /// negative coordinates.
    #[must_use]
    pub fn align_in_with_origin(
        self,
        outer: Rect,
        alignment: Alignment,
        origin: Origin,
    ) -> Self {
        let far_y = outer.size.height - self.size.height;
        let mut rect = self;

        if alignment.contains(Alignment::TOP) {
            rect.origin.y = match origin {
                Origin::TopLeft => 0.0,
                Origin::BottomLeft => far_y,
            };
        }

        if alignment.contains(Alignment::LEFT) {
            rect.origin.x = 0.0;
        }

        if alignment.contains(Alignment::BOTTOM) {
            rect.origin.y = match origin {
                Origin::TopLeft => far_y,
                Origin::BottomLeft => 0.0,
            };
        }

        if alignment.contains(Alignment::RIGHT) {
            rect.origin.x = outer.size.width - self.size.width;
        }

        rect
    }

    /// [`align_in_with_origin`](Self::align_in_with_origin) with the
    /// build-time [`Origin::DEFAULT`].
    ///
    /// Use the explicit variant when the coordinate system in play is not
    /// the one the crate was configured for.
    #[inline]
    #[must_use]
    pub fn align_in(self, outer: Rect, alignment: Alignment) -> Self {
        self.align_in_with_origin(outer, alignment, Origin::DEFAULT)
    }
}
