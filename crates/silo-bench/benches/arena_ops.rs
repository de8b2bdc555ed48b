//! Criterion micro-benchmarks for arena push, get, delete, and pop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use silo_arena::BucketArena;
use silo_bench::{filled_arena, probe_indices, BenchElem};

const LEN: usize = 1_000_000;

/// Power-of-two (shift/mask) versus general (division) bucket capacities.
const CAPACITIES: [usize; 2] = [1024, 1000];

/// Benchmark: push 65K elements into a fresh arena.
fn bench_push_65k(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_push_65k");
    for capacity in CAPACITIES {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            b.iter(|| {
                let mut arena = BucketArena::with_bucket_capacity(cap);
                for i in 0..65_535 {
                    arena.push(BenchElem {
                        a: i as i64,
                        b: -1,
                        ..BenchElem::default()
                    });
                }
                black_box(arena.len())
            });
        });
    }
    group.finish();
}

/// Benchmark: forward sequential and random reads over 1M elements.
fn bench_get_1m(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_get_1m");
    for capacity in CAPACITIES {
        let arena = filled_arena(capacity, LEN);
        let probes = probe_indices(42, 4096, LEN);

        group.bench_with_input(BenchmarkId::new("forward", capacity), &arena, |b, arena| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % LEN;
                black_box(arena.get(i))
            });
        });
        group.bench_with_input(BenchmarkId::new("random", capacity), &arena, |b, arena| {
            let mut k = 0;
            b.iter(|| {
                k = (k + 1) % probes.len();
                black_box(arena.get(probes[k]))
            });
        });
        group.bench_with_input(BenchmarkId::new("last", capacity), &arena, |b, arena| {
            b.iter(|| black_box(arena.get(LEN - 1)));
        });
    }
    group.finish();
}

/// Benchmark: push one element then pop it (steady state, no growth).
fn bench_push_then_pop(c: &mut Criterion) {
    let mut arena = filled_arena(1024, 10_000);
    c.bench_function("arena_push_then_pop", |b| {
        b.iter(|| {
            arena.push(BenchElem::numbered(1));
            black_box(arena.pop().ok())
        });
    });
}

/// Benchmark: swap-delete from the front of a 100K arena, refilling as needed.
fn bench_delete_front(c: &mut Criterion) {
    let mut arena = filled_arena(1024, 100_000);
    c.bench_function("arena_delete_front", |b| {
        b.iter(|| {
            if arena.len() < 2 {
                arena.extend((0..100_000).map(BenchElem::numbered));
            }
            black_box(arena.delete(0).ok())
        });
    });
}

criterion_group!(
    benches,
    bench_push_65k,
    bench_get_1m,
    bench_push_then_pop,
    bench_delete_front
);
criterion_main!(benches);
