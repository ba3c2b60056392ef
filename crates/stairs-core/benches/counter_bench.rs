//! # Counter Benchmarks
//!
//! Performance benchmarks for stairs-core counting operations.
//!
//! Run with: `cargo bench -p stairs-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stairs_core::{MAX_STAIRS, StairCount, StepCounter, climb_stairs};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_climb_stairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("climb_stairs");

    for stairs in [10u64, 50, 100, MAX_STAIRS].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(stairs), stairs, |b, &stairs| {
            b.iter(|| black_box(climb_stairs(black_box(stairs))));
        });
    }

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let counter = StepCounter::new();

    for up_to in [10u64, 100, MAX_STAIRS].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(up_to), up_to, |b, &up_to| {
            b.iter(|| black_box(counter.table(StairCount(up_to))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_climb_stairs, bench_table);
criterion_main!(benches);
