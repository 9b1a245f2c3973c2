//! Criterion micro-benchmarks for piece layout planning and boundaries.

use criterion::{criterion_group, criterion_main, Criterion};
use meshpart_layout::{plan_layout, AxisBounds};
use std::hint::black_box;

/// Benchmark: Plan layouts for every piece count up to 1024 on a skinny grid.
fn bench_plan_layout_sweep(c: &mut Criterion) {
    c.bench_function("plan_layout_1_to_1024", |b| {
        b.iter(|| {
            for pieces in 1..=1024u32 {
                let layout = plan_layout(black_box(pieces), 4000, 1000).unwrap();
                black_box(layout);
            }
        });
    });
}

/// Benchmark: Plan a highly composite piece count on a square grid.
fn bench_plan_layout_composite(c: &mut Criterion) {
    c.bench_function("plan_layout_720720", |b| {
        b.iter(|| {
            let layout = plan_layout(black_box(720_720), 100_000, 100_000).unwrap();
            black_box(layout);
        });
    });
}

/// Benchmark: Build breakpoints and walk 1M indices with a cursor.
fn bench_axis_cursor_walk(c: &mut Criterion) {
    let bounds = AxisBounds::new(97, 1_000_000);

    c.bench_function("axis_cursor_walk_1m", |b| {
        b.iter(|| {
            let mut cursor = bounds.cursor();
            let mut shared = 0u32;
            for i in 0..=1_000_000u32 {
                if cursor.step(i).on_boundary {
                    shared += 1;
                }
            }
            black_box(shared);
        });
    });
}

criterion_group!(
    benches,
    bench_plan_layout_sweep,
    bench_plan_layout_composite,
    bench_axis_cursor_walk
);
criterion_main!(benches);
