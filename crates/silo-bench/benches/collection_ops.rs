//! Criterion micro-benchmarks for the object pool and sparse set.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use silo_collections::{ObjectPool, SparseSet};

#[derive(Default)]
struct Slot {
    n: usize,
}

/// Benchmark: a 10K-acquire pool cycle after warm-up (no allocation).
fn bench_pool_cycle_10k(c: &mut Criterion) {
    let mut pool: ObjectPool<Slot> = ObjectPool::new();
    c.bench_function("pool_cycle_10k", |b| {
        b.iter(|| {
            pool.clear();
            for n in 0..10_000 {
                pool.acquire().n = n;
            }
            black_box(pool.get(9_999).map(|s| s.n))
        });
    });
}

/// Benchmark: overwrite values in a 1M-entry sparse set.
fn bench_sparse_set_replace(c: &mut Criterion) {
    let mut sp: SparseSet<usize, u64> = SparseSet::new();
    for i in 0..1_000_000 {
        sp.set(i, i as u64);
    }
    let mut key = 0;
    c.bench_function("sparse_set_replace_1m", |b| {
        b.iter(|| {
            key = (key + 1) % 1_000_000;
            black_box(sp.set(key, 7))
        });
    });
}

/// Benchmark: delete then re-insert one key (swap-delete + sparse rewire).
fn bench_sparse_set_delete_insert(c: &mut Criterion) {
    let mut sp: SparseSet<usize, u64> = SparseSet::new();
    for i in 0..100_000 {
        sp.set(i, i as u64);
    }
    let mut key = 0;
    c.bench_function("sparse_set_delete_insert", |b| {
        b.iter(|| {
            key = (key + 7919) % 100_000;
            let v = sp.delete(key);
            sp.set(key, v.unwrap_or_default());
        });
    });
}

/// Benchmark: dense walk over 1M entries.
fn bench_sparse_set_each_1m(c: &mut Criterion) {
    let mut sp: SparseSet<usize, u64> = SparseSet::new();
    for i in 0..1_000_000 {
        sp.set(i, i as u64);
    }
    c.bench_function("sparse_set_each_1m", |b| {
        b.iter(|| {
            sp.for_each_until(|_, v| {
                *v += 12;
                true
            })
        });
    });
}

criterion_group!(
    benches,
    bench_pool_cycle_10k,
    bench_sparse_set_replace,
    bench_sparse_set_delete_insert,
    bench_sparse_set_each_1m
);
criterion_main!(benches);
