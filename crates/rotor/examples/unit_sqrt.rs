//! Classify a few points against `sqrt(x) + sqrt(y) - 1 = 0`.
//!
//! Usage:
//!   cargo run -p rotor --example unit_sqrt -- [count] [seed]

use rotor::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(8usize);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025u64);

    let curve = Curve2D::new(|x: f32, y: f32| x.sqrt() + y.sqrt() - 1.0);
    let cfg = CurveCfg::default();

    for p in [Point2D::new(0, 1), Point2D::new(0, 0), Point2D::new(1, 1)] {
        println!("{p}: f = {:>9.6}  {}", curve.eval(p), curve.classify(p, cfg));
    }

    let pts = match draw_points(Bounds2::unit(), count, ReplayToken::new(seed, 0)) {
        Ok(pts) => pts,
        Err(err) => {
            eprintln!("sampling failed: {err}");
            return;
        }
    };
    let inside = pts
        .iter()
        .filter(|&&p| curve.classify(p, cfg) == Side::Inside)
        .count();
    println!("{inside}/{count} random points in the unit box lie inside");
}
