//! `Curve2D`: a planar curve given by an implicit equation `f(x, y) = 0`.
//!
//! The curve only stores the equation and runs it. By convention `f < 0`
//! reads as inside and `f > 0` as outside, but nothing here enforces that;
//! `eval` returns the raw value, NaN and infinities included.

use super::point::Point2D;
use super::types::CurveCfg;
use nalgebra::Vector2;
use std::fmt;

/// Boxed equation, for storing curves built from different closures together.
pub type DynEquation = Box<dyn Fn(f32, f32) -> f32 + Send + Sync>;

/// Curve over a type-erased equation.
pub type DynCurve2D = Curve2D<DynEquation>;

/// Implicit curve `{ (x, y) : f(x, y) = 0 }`.
#[derive(Clone, Copy)]
pub struct Curve2D<F> {
    func: F,
}

/// Sign reading of an equation value, see [`Curve2D::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Inside,
    On,
    Outside,
    /// The equation returned NaN.
    Undefined,
}

impl Side {
    /// Read a raw equation value with tolerance `eps_on`.
    pub fn of_value(value: f32, eps_on: f32) -> Side {
        if value.is_nan() {
            Side::Undefined
        } else if value.abs() <= eps_on {
            Side::On
        } else if value < 0.0 {
            Side::Inside
        } else {
            Side::Outside
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Inside => "inside",
            Side::On => "on",
            Side::Outside => "outside",
            Side::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<F> Curve2D<F>
where
    F: Fn(f32, f32) -> f32,
{
    /// Wrap `equation`; it is not inspected.
    #[inline]
    pub fn new(equation: F) -> Self {
        Self { func: equation }
    }

    /// `f(point.x, point.y)`, unchanged.
    #[inline]
    pub fn eval(&self, point: Point2D) -> f32 {
        (self.func)(point.x(), point.y())
    }

    #[inline]
    pub fn eval_vec(&self, v: Vector2<f32>) -> f32 {
        (self.func)(v.x, v.y)
    }

    /// Sign of `eval(point)`; `|f| <= cfg.eps_on` counts as on the curve.
    pub fn classify(&self, point: Point2D, cfg: CurveCfg) -> Side {
        Side::of_value(self.eval(point), cfg.eps_on)
    }

    #[inline]
    pub fn contains(&self, point: Point2D, cfg: CurveCfg) -> bool {
        self.classify(point, cfg) == Side::On
    }
}

impl<F> Curve2D<F>
where
    F: Fn(f32, f32) -> f32 + Send + Sync + 'static,
{
    /// Erase the equation type.
    pub fn boxed(self) -> DynCurve2D {
        Curve2D {
            func: Box::new(self.func) as DynEquation,
        }
    }
}

impl<F> fmt::Debug for Curve2D<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve2D").finish_non_exhaustive()
    }
}
