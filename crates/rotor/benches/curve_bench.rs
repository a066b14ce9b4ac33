//! Criterion benchmarks for curve evaluation over sampled points.
//! Focus sizes: n in {16, 256, 4096}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rotor::prelude::*;
use std::hint::black_box;

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve2d");
    let generic = Curve2D::new(|x: f32, y: f32| x.sqrt() + y.sqrt() - 1.0);
    let boxed = Curve2D::new(|x: f32, y: f32| x.sqrt() + y.sqrt() - 1.0).boxed();
    let cfg = CurveCfg::default();
    for &n in &[16usize, 256, 4096] {
        let pts = draw_points(Bounds2::unit(), n, ReplayToken::new(43, n as u64)).unwrap();

        group.bench_with_input(BenchmarkId::new("eval_generic", n), &pts, |b, pts| {
            b.iter(|| pts.iter().map(|&p| generic.eval(black_box(p))).sum::<f32>())
        });

        group.bench_with_input(BenchmarkId::new("eval_boxed", n), &pts, |b, pts| {
            b.iter(|| pts.iter().map(|&p| boxed.eval(black_box(p))).sum::<f32>())
        });

        group.bench_with_input(BenchmarkId::new("classify", n), &pts, |b, pts| {
            b.iter(|| {
                pts.iter()
                    .filter(|&&p| generic.classify(black_box(p), cfg) == Side::Inside)
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("draw_points", n), &n, |b, &n| {
            b.iter(|| draw_points(Bounds2::unit(), n, ReplayToken::new(44, 0)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curve, bench_sampling);
criterion_main!(benches);
