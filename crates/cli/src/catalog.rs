//! Named curves the CLI can evaluate.

use clap::ValueEnum;
use rotor::geometry::{Curve2D, DynCurve2D};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurveName {
    /// sqrt(x) + sqrt(y) - 1
    UnitSqrt,
    /// x^2 + y^2 - r^2
    Circle,
    /// y - x
    Line,
}

impl CurveName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveName::UnitSqrt => "unit-sqrt",
            CurveName::Circle => "circle",
            CurveName::Line => "line",
        }
    }

    /// `radius` is only read by `Circle`.
    pub fn build(self, radius: f32) -> DynCurve2D {
        match self {
            CurveName::UnitSqrt => Curve2D::new(|x: f32, y: f32| x.sqrt() + y.sqrt() - 1.0).boxed(),
            CurveName::Circle => {
                let r2 = radius * radius;
                Curve2D::new(move |x: f32, y: f32| x * x + y * y - r2).boxed()
            }
            CurveName::Line => Curve2D::new(|x: f32, y: f32| y - x).boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotor::geometry::Point2D;

    #[test]
    fn catalog_curves_vanish_on_known_points() {
        assert_eq!(CurveName::UnitSqrt.build(1.0).eval(Point2D::new(0, 1)), 0.0);
        assert_eq!(CurveName::Circle.build(2.0).eval(Point2D::new(0, -2)), 0.0);
        assert_eq!(CurveName::Line.build(1.0).eval(Point2D::new(3, 3)), 0.0);
    }

    #[test]
    fn names_match_clap_values() {
        for name in CurveName::value_variants() {
            let parsed = CurveName::from_str(name.as_str(), false).unwrap();
            assert_eq!(parsed, *name);
        }
    }
}
