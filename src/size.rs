/// 2D extent in logical pixels.
///
/// Width and height are typically non-negative, but nothing here enforces
/// that; negative values propagate arithmetically.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0.0, height: 0.0 }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Rounds both components to their closest whole-number value.
    ///
    /// Halfway cases round away from zero.
    #[inline]
    #[must_use]
    pub fn integral(self) -> Self {
        Self::new(self.width.round(), self.height.round())
    }

    /// Scales width by `sx` and height by `sy`, then snaps to integral.
    ///
    /// Zero and negative factors are not rejected.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.width * sx, self.height * sy).integral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── integral ──────────────────────────────────────────────────────────

    #[test]
    fn integral_rounds_both_components() {
        assert_eq!(Size::new(9.4, 9.6).integral(), Size::new(9.0, 10.0));
    }

    #[test]
    fn integral_half_rounds_away_from_zero() {
        assert_eq!(Size::new(1.5, -1.5).integral(), Size::new(2.0, -2.0));
    }

    #[test]
    fn integral_is_idempotent() {
        let s = Size::new(7.3, 2.8).integral();
        assert_eq!(s.integral(), s);
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_non_uniform() {
        assert_eq!(Size::new(10.0, 20.0).scale(2.0, 0.5), Size::new(20.0, 10.0));
    }

    #[test]
    fn scale_identity_equals_integral() {
        let s = Size::new(10.4, 20.6);
        assert_eq!(s.scale(1.0, 1.0), s.integral());
    }

    #[test]
    fn scale_zero_factor_collapses_axis() {
        assert_eq!(Size::new(10.0, 20.0).scale(0.0, 1.0), Size::new(0.0, 20.0));
    }

    #[test]
    fn scale_negative_factor_propagates() {
        assert_eq!(Size::new(10.0, 20.0).scale(-1.0, 2.0), Size::new(-10.0, 40.0));
    }

    #[test]
    fn scale_snaps_fractional_result() {
        // 10 * 0.25 = 2.5 snaps away from zero to 3.
        assert_eq!(Size::new(10.0, 10.0).scale(0.25, 0.25), Size::new(3.0, 3.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_or_negative() {
        assert!(Size::new(0.0, 5.0).is_empty());
        assert!(Size::new(5.0, -1.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
