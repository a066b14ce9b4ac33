//! Curated API for callers that want one import path.
//!
//! Prefer these re-exports over reaching into `geometry` submodules.

// Points and curves
pub use crate::geometry::{Curve2D, CurveCfg, DynCurve2D, DynEquation, Point2D, Side, ToF32};
// Sampling
pub use crate::geometry::rand::{
    draw_points, Bounds2 as Bounds2D, ReplayToken as PointReplay, SampleError,
};
