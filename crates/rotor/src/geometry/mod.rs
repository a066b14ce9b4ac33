//! Planar points and implicit curves.
//!
//! Purpose
//! - `Point2D`: immutable coordinate pair, always `f32`, built from any
//!   primitive number.
//! - `Curve2D`: stores an equation `f(x, y)` and evaluates it at points. No
//!   root-finding or intersection; the raw value is the whole answer.
//!
//! Code cross-refs: `Point2D`, `Curve2D`, `Side`, `CurveCfg`, `rand::draw_points`

mod curve;
mod point;
pub mod rand;
mod types;

pub use curve::{Curve2D, DynCurve2D, DynEquation, Side};
pub use point::{Point2D, ToF32};
pub use types::CurveCfg;
