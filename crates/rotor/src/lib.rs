//! Foundation geometry: points and implicit curves in the plane.
//!
//! API Policy
//! - `geometry` holds the types; `api` and `prelude` are re-export surfaces.
//! - Coordinates are `f32` throughout; wider inputs are narrowed on entry.

pub mod api;
pub mod geometry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::{Curve2D, CurveCfg, Point2D, Side};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::rand::{draw_points, Bounds2, ReplayToken, SampleError};
    pub use crate::geometry::{Curve2D, CurveCfg, DynCurve2D, Point2D, Side, ToF32};
}
