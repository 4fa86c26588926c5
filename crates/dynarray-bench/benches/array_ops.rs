//! Criterion micro-benchmarks for container growth, insertion, and iteration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynarray::DynArray;
use dynarray_bench::{prefilled, sequential_values};

/// Benchmark: push 1K elements starting from an empty array (10 reallocations).
fn bench_push_1k(c: &mut Criterion) {
    let values = sequential_values(1_000);
    c.bench_function("push_1k", |b| {
        b.iter(|| {
            let mut arr = DynArray::new();
            for &v in &values {
                arr.push(v);
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: push 1K elements into pre-reserved capacity (no reallocation).
fn bench_push_1k_reserved(c: &mut Criterion) {
    let values = sequential_values(1_000);
    c.bench_function("push_1k_reserved", |b| {
        b.iter(|| {
            let mut arr = DynArray::with_capacity(1_000);
            for &v in &values {
                arr.push(v);
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: repeated front insertion, the worst-case shift distance.
fn bench_insert_front_256(c: &mut Criterion) {
    c.bench_function("insert_front_256", |b| {
        b.iter(|| {
            let mut arr = DynArray::new();
            for v in 0..256 {
                arr.insert(0, v);
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: drain a 256-element array from the front.
fn bench_remove_front_256(c: &mut Criterion) {
    c.bench_function("remove_front_256", |b| {
        b.iter(|| {
            let mut arr = prefilled(256);
            while !arr.is_empty() {
                black_box(arr.remove(0));
            }
        });
    });
}

/// Benchmark: deep copy of a 1K-element array, capacity preserved.
fn bench_clone_1k(c: &mut Criterion) {
    let arr = prefilled(1_000);
    c.bench_function("clone_1k", |b| {
        b.iter(|| {
            let copy = arr.clone();
            black_box(copy.capacity());
        });
    });
}

/// Benchmark: borrowed iteration over 1K live elements.
fn bench_iterate_1k(c: &mut Criterion) {
    let arr = prefilled(1_000);
    c.bench_function("iterate_1k", |b| {
        b.iter(|| {
            let sum: i64 = arr.iter().map(|&v| v as i64).sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_push_1k,
    bench_push_1k_reserved,
    bench_insert_front_256,
    bench_remove_front_256,
    bench_clone_1k,
    bench_iterate_1k,
);
criterion_main!(benches);
