//! Tolerances for reading curve values.

/// Curve configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveCfg {
    /// `|f(p)| <= eps_on` counts as on the curve.
    pub eps_on: f32,
}

impl Default for CurveCfg {
    fn default() -> Self {
        Self { eps_on: 1e-6 }
    }
}

impl CurveCfg {
    /// Exact reading: only `f(p) == 0` is on the curve.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_on: 0.0 }
    }
}
