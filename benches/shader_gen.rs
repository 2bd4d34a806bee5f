//! Benchmarks for CPU-side generation: shader assembly, lookup grids,
//! and initial position data.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use murmuration::geometry::lookup_coords;
use murmuration::shader::{sim_shader, DEFAULT_RULE};
use murmuration::spawn::random_positions_seeded;

fn bench_sim_shader(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim_shader");

    group.bench_function("default_rule", |b| {
        b.iter(|| black_box(sim_shader(DEFAULT_RULE)))
    });

    group.bench_function("custom_rule", |b| {
        let rule = r#"
            let pull = -normalize(p) * uniforms.bounds * 0.1;
            p += pull * uniforms.delta_time;
        "#;
        b.iter(|| black_box(sim_shader(rule)))
    });

    group.finish();
}

fn bench_lookup_coords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_coords");

    for size in [64u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter(|| black_box(lookup_coords(size, size)))
        });
    }

    group.finish();
}

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_positions");

    for size in [64u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter(|| black_box(random_positions_seeded(size, size, 512.0, 42)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sim_shader, bench_lookup_coords, bench_spawn);
criterion_main!(benches);
