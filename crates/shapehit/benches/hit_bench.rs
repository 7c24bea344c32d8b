//! Criterion benchmarks for the hit tester.
//! Focus sizes: vertex counts n in {4, 16, 64, 256}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapehit::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use shapehit::hit::{EdgeAnchor, HitTester};

fn random_clicks(k: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| Vector2::new(rng.gen_range(100.0..400.0), rng.gen_range(100.0..400.0)))
        .collect()
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit");
    let clicks = random_clicks(256, 43);
    for &n in &[4usize, 16, 64, 256] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let Some(poly) = draw_polygon_radial(cfg, ReplayToken::new(2025, n as u64)) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("contains", n), &poly, |b, poly| {
            b.iter(|| clicks.iter().filter(|p| poly.contains(**p)).count())
        });

        for anchor in [EdgeAnchor::Fixed, EdgeAnchor::Live] {
            let tester = HitTester {
                anchor,
                ..HitTester::default()
            };
            let name = format!("classify_{anchor:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, n), &poly, |b, poly| {
                b.iter(|| {
                    clicks
                        .iter()
                        .filter(|p| tester.classify(**p, poly).is_inside())
                        .count()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hit);
criterion_main!(benches);
