use bitflags::bitflags;

bitflags! {
    /// Edges of a container to pin a rect against.
    ///
    /// Flags may be combined. When both vertical flags are present, `BOTTOM`
    /// wins over `TOP`; when both horizontal flags are present, `RIGHT` wins
    /// over `LEFT`.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
    pub struct Alignment: u8 {
        const TOP = 1;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

/// Which corner of the coordinate plane is (0, 0).
///
/// Determines the direction vertical alignment resolves in. The x-axis is
/// assumed to run rightwards in both variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Origin {
    /// +Y runs downward. The convention of most UI toolkits.
    TopLeft,
    /// +Y runs upward. The AppKit / OpenGL convention.
    BottomLeft,
}

impl Origin {
    /// Build-time default used by [`Rect::align_in`](crate::Rect::align_in).
    ///
    /// `TopLeft` unless the crate is built with the `bottom-left-origin`
    /// feature. Callers targeting a non-default coordinate system should use
    /// [`Rect::align_in_with_origin`](crate::Rect::align_in_with_origin) and
    /// pass the origin explicitly.
    #[cfg(feature = "bottom-left-origin")]
    pub const DEFAULT: Origin = Origin::BottomLeft;
    #[cfg(not(feature = "bottom-left-origin"))]
    pub const DEFAULT: Origin = Origin::TopLeft;
}
