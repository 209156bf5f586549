//! Criterion micro-benchmarks for push, pop, shifting insert/delete, and remove.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use resarray_bench::{boundary_thrash, drain_front, filled, prepend_all, push_pop_cycle, remove_runs};
use resarray_test_utils::array_of;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| filled(black_box(n)));
        });
    }
    group.finish();
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_cycle");
    for n in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| push_pop_cycle(black_box(n)));
        });
    }
    group.finish();
}

fn bench_boundary_thrash(c: &mut Criterion) {
    // 1023 live values in capacity 1024: sits on the growth threshold.
    c.bench_function("boundary_thrash_1023x1000", |b| {
        b.iter(|| boundary_thrash(black_box(1023), black_box(1000)));
    });
}

fn bench_shifting(c: &mut Criterion) {
    let mut group = c.benchmark_group("shifting");
    for n in [100u64, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("prepend_all", n), &n, |b, &n| {
            b.iter(|| prepend_all(black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("drain_front", n), &n, |b, &n| {
            b.iter(|| drain_front(black_box(n)));
        });
    }
    group.finish();
}

fn bench_find_and_remove(c: &mut Criterion) {
    let values: Vec<u64> = (0..10_000).collect();
    let arr = array_of(&values);
    c.bench_function("find_last_10k", |b| {
        b.iter(|| arr.find(black_box(&9_999)));
    });
    c.bench_function("find_missing_10k", |b| {
        b.iter(|| arr.find(black_box(&10_000)));
    });

    let mut group = c.benchmark_group("remove_runs");
    for run in [1usize, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(run), &run, |b, &run| {
            b.iter(|| remove_runs(black_box(500), run));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_push_pop_cycle,
    bench_boundary_thrash,
    bench_shifting,
    bench_find_and_remove,
);
criterion_main!(benches);
