//! Pure 2D geometry helpers for placing rectangles.
//!
//! Three value types — [`Point`], [`Size`], and [`Rect`] — with stateless
//! operations for pixel snapping, scaling, centering, and pinning a rect
//! against the edges of a container.
//!
//! Canonical CPU space:
//! - Logical pixels (`f32`)
//! - +X right; +Y direction depends on the coordinate [`Origin`]
//!
//! Vertical alignment is parameterized by [`Origin`], which says whether
//! (0, 0) is the top-left or bottom-left corner of the plane; the short
//! [`Rect::align_in`] form uses a build-time default.
//! Every function is total: negative sizes, NaN, and infinities are never
//! rejected, they just propagate.

mod align;
mod point;
mod rect;
mod size;

pub use align::{Alignment, Origin};
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
