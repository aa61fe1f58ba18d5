//! Benchmarks for alignment engines.
//!
//! Compares `align`, `salign` and map alignment against hand-written loops
//! over the same inputs.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use semialign::align::{AlignExt, align_sorted};
use semialign::control::Ior;
use semialign::typeclass::{Crosswalk, Semialign, Sum};
use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;

// =============================================================================
// Sequence Alignment Benchmarks
// =============================================================================

fn benchmark_vec_align(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_align");

    for size in [100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let left: Vec<u64> = (0..size as u64).collect();
        let right: Vec<u64> = (0..(size / 2) as u64).collect();

        group.bench_with_input(BenchmarkId::new("align", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.clone().align(right.clone())));
        });

        group.bench_with_input(BenchmarkId::new("manual_loop", size), &size, |bencher, _| {
            bencher.iter(|| {
                let (left, right) = (left.clone(), right.clone());
                let length = left.len().max(right.len());
                let mut left_iter = left.into_iter();
                let mut right_iter = right.into_iter();
                let mut output = Vec::with_capacity(length);
                for _ in 0..length {
                    output.push(match (left_iter.next(), right_iter.next()) {
                        (Some(a), Some(b)) => Ior::Both(a, b),
                        (Some(a), None) => Ior::Left(a),
                        (None, Some(b)) => Ior::Right(b),
                        (None, None) => break,
                    });
                }
                black_box(output)
            });
        });
    }

    group.finish();
}

fn benchmark_lazy_salign(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_salign");

    group.bench_function("salign_sum", |bencher| {
        bencher.iter(|| {
            let total: u64 = (0..10_000_u64)
                .map(Sum)
                .salign((0..5_000_u64).map(Sum))
                .map(Sum::into_inner)
                .sum();
            black_box(total)
        });
    });

    group.bench_function("zip_then_chain", |bencher| {
        bencher.iter(|| {
            let overlap: u64 = (0..5_000_u64).zip(0..5_000_u64).map(|(a, b)| a + b).sum();
            let tail: u64 = (5_000..10_000_u64).sum();
            black_box(overlap + tail)
        });
    });

    group.finish();
}

// =============================================================================
// Sorted and Map Alignment Benchmarks
// =============================================================================

fn benchmark_map_align(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_align");

    for size in [100_u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        let left_tree: BTreeMap<u32, u32> = (0..size).map(|key| (key * 2, key)).collect();
        let right_tree: BTreeMap<u32, u32> = (0..size).map(|key| (key * 3, key)).collect();
        let left_hash: HashMap<u32, u32> = left_tree.clone().into_iter().collect();
        let right_hash: HashMap<u32, u32> = right_tree.clone().into_iter().collect();

        group.bench_with_input(BenchmarkId::new("btree_map", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left_tree.clone().align(right_tree.clone())));
        });

        group.bench_with_input(BenchmarkId::new("hash_map", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left_hash.clone().align(right_hash.clone())));
        });

        group.bench_with_input(BenchmarkId::new("sorted_keys", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(align_sorted(left_tree.keys(), right_tree.keys()).count())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Crosswalk Benchmarks
// =============================================================================

fn benchmark_crosswalk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("crosswalk");
    let rows: Vec<Vec<u32>> = (0..100).map(|row| (row..row + 50).collect()).collect();

    group.bench_function("transpose_100x50", |bencher| {
        bencher.iter(|| black_box(rows.clone().sequence_aligned()));
    });

    group.bench_function("group_by_key", |bencher| {
        bencher.iter(|| {
            black_box((0..1_000_u32).crosswalk(|value| BTreeMap::from([(value % 16, value)])))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_vec_align,
    benchmark_lazy_salign,
    benchmark_map_align,
    benchmark_crosswalk,
);

criterion_main!(benches);
