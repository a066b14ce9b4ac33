//! `Point2D`: an immutable 2D coordinate pair stored at `f32` precision.
//!
//! - Any primitive numeric input is narrowed with `as f32` (IEEE-754 round to
//!   nearest). Non-finite inputs propagate; nothing is validated.
//! - Fields are private so a constructed point cannot change.

use nalgebra::{Point2, Vector2};
use std::fmt;

/// Primitive numbers accepted by [`Point2D::new`].
pub trait ToF32: Copy {
    fn to_f32(self) -> f32;
}

macro_rules! impl_to_f32 {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToF32 for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_to_f32!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A point in the plane. Coordinates are always `f32`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    x: f32,
    y: f32,
}

impl Point2D {
    /// Build a point from any two primitive numbers; the types may differ.
    #[inline]
    pub fn new<X: ToF32, Y: ToF32>(x: X, y: Y) -> Self {
        Self {
            x: x.to_f32(),
            y: y.to_f32(),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Components in order `(x, y)`.
    #[inline]
    pub fn into_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Point2D> for (f32, f32) {
    #[inline]
    fn from(p: Point2D) -> Self {
        p.into_tuple()
    }
}

impl<X: ToF32, Y: ToF32> From<(X, Y)> for Point2D {
    #[inline]
    fn from((x, y): (X, Y)) -> Self {
        Point2D::new(x, y)
    }
}

impl From<[f32; 2]> for Point2D {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Point2D::new(x, y)
    }
}

impl From<Vector2<f32>> for Point2D {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl From<Point2D> for Vector2<f32> {
    #[inline]
    fn from(p: Point2D) -> Self {
        p.to_vector()
    }
}

impl From<Point2<f32>> for Point2D {
    #[inline]
    fn from(p: Point2<f32>) -> Self {
        Point2D::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2<f32> {
    #[inline]
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
