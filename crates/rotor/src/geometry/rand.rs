//! Random points in an axis-aligned box (replay tokens).
//!
//! Purpose
//! - Feed curve classification runs and benches with reproducible inputs.
//!
//! Model
//! - Each coordinate is uniform on the closed interval of its axis.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   equal tokens give equal point sequences.

use super::point::Point2D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Closed box `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds2 {
    #[inline]
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// `[0, 1] × [0, 1]`.
    #[inline]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    pub fn contains(&self, p: Point2D) -> bool {
        (self.x_min..=self.x_max).contains(&p.x()) && (self.y_min..=self.y_max).contains(&p.y())
    }

    /// Reject boxes the sampler cannot draw from.
    pub fn validate(&self) -> Result<(), SampleError> {
        let axes = [
            ('x', self.x_min, self.x_max),
            ('y', self.y_min, self.y_max),
        ];
        for (axis, lo, hi) in axes {
            if !lo.is_finite() || !hi.is_finite() || !(hi - lo).is_finite() {
                return Err(SampleError::NonFinite { axis });
            }
            if lo > hi {
                return Err(SampleError::EmptyRange { axis, lo, hi });
            }
        }
        Ok(())
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::unit()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleError {
    /// `lo > hi` on one axis.
    EmptyRange { axis: char, lo: f32, hi: f32 },
    /// An endpoint or the width of an axis is not finite.
    NonFinite { axis: char },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptyRange { axis, lo, hi } => {
                write!(f, "{axis}-range [{lo}, {hi}] is empty")
            }
            SampleError::NonFinite { axis } => {
                write!(f, "{axis}-range is not finite")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` points uniformly from `bounds`.
pub fn draw_points(
    bounds: Bounds2,
    count: usize,
    tok: ReplayToken,
) -> Result<Vec<Point2D>, SampleError> {
    bounds.validate()?;
    let mut rng = tok.to_std_rng();
    let pts = (0..count)
        .map(|_| {
            let x = rng.gen_range(bounds.x_min..=bounds.x_max);
            let y = rng.gen_range(bounds.y_min..=bounds.y_max);
            Point2D::new(x, y)
        })
        .collect();
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_replay_and_stay_in_bounds() {
        let b = Bounds2::new(-1.0, 2.0, 0.5, 0.75);
        let tok = ReplayToken::new(2025, 3);
        let a = draw_points(b, 64, tok).unwrap();
        let again = draw_points(b, 64, tok).unwrap();
        assert_eq!(a, again);
        assert_eq!(a.len(), 64);
        assert!(a.iter().all(|&p| b.contains(p)));
        let other = draw_points(b, 64, tok.next()).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn degenerate_box_yields_single_point() {
        let b = Bounds2::new(0.5, 0.5, -1.0, -1.0);
        let pts = draw_points(b, 4, ReplayToken::new(1, 0)).unwrap();
        assert!(pts.iter().all(|&p| p == Point2D::new(0.5, -1.0)));
    }

    #[test]
    fn invalid_boxes_are_rejected() {
        let empty = Bounds2::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(
            draw_points(empty, 1, ReplayToken::new(0, 0)),
            Err(SampleError::EmptyRange {
                axis: 'x',
                lo: 1.0,
                hi: 0.0
            })
        );
        let inf = Bounds2::new(0.0, 1.0, 0.0, f32::INFINITY);
        assert_eq!(inf.validate(), Err(SampleError::NonFinite { axis: 'y' }));
        let wide = Bounds2::new(-f32::MAX, f32::MAX, 0.0, 1.0);
        assert_eq!(wide.validate(), Err(SampleError::NonFinite { axis: 'x' }));
        assert_eq!(
            SampleError::EmptyRange {
                axis: 'x',
                lo: 1.0,
                hi: 0.0
            }
            .to_string(),
            "x-range [1, 0] is empty"
        );
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(draw_points(Bounds2::unit(), 0, ReplayToken::new(9, 9))
            .unwrap()
            .is_empty());
    }
}
