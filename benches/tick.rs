//! Benchmarks for the per-frame hot path.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use wisp::noise::NoiseField;
use wisp::swarm::{Swarm, Tick};
use wisp::SwarmConfig;

fn bench_swarm_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_tick");

    // The two counts the viewport heuristic picks between.
    for count in [1200u32, 2500] {
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let config = SwarmConfig {
                particle_count: Some(count),
                ..SwarmConfig::default()
            };
            let mut swarm = Swarm::with_seed(config, Vec2::new(1920.0, 1080.0), Some(7));
            let mut now = 0.0;
            b.iter(|| {
                now += 1.0 / 60.0;
                swarm.tick(black_box(now));
            });
        });
    }

    group.finish();
}

fn bench_noise_sample(c: &mut Criterion) {
    let field = NoiseField::default();
    let mut t = 0.0f64;
    c.bench_function("noise_sample", |b| {
        b.iter(|| {
            t += 0.01;
            black_box(field.sample(black_box(t), black_box(-t * 0.5), black_box(t * 0.125)))
        })
    });
}

criterion_group!(benches, bench_swarm_tick, bench_noise_sample);
criterion_main!(benches);
