//! Criterion benchmarks for sample-set construction and derived statistics.
//!
//! Discover benches:
//!   cargo bench --bench sampleset -- --list
//!
//! Save a baseline:
//!   cargo bench --bench sampleset -- --save-baseline stats_base

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use samplestats::SampleSet;

fn gen_dataset(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1e6..1e6)).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &n in &[100_usize, 10_000, 1_000_000] {
        let data = gen_dataset(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| SampleSet::from_samples(black_box(data)).expect("construct"));
        });
    }
    group.finish();
}

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_stats");
    for &n in &[100_usize, 10_000, 1_000_000] {
        let set = SampleSet::from_vec(gen_dataset(n, 42)).expect("construct");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("iqr", n), &set, |b, set| {
            b.iter(|| black_box(set.interquartile_range()));
        });
    }
    group.finish();
}

fn bench_lazy_trackers(c: &mut Criterion) {
    let mut group = c.benchmark_group("trackers");
    for &n in &[100_usize, 10_000] {
        let data = gen_dataset(n, 42);
        group.throughput(Throughput::Elements(n as u64));

        // First call pays the full pass; rebuild the set per iteration.
        group.bench_with_input(BenchmarkId::new("mode_cold", n), &data, |b, data| {
            b.iter(|| {
                let set = SampleSet::from_samples(data).expect("construct");
                let (count, _) = set.mode();
                black_box(count)
            });
        });

        let warm = SampleSet::from_samples(&data).expect("construct");
        let _ = warm.mode();
        let _ = warm.sample_variance();
        group.bench_with_input(BenchmarkId::new("mode_warm", n), &warm, |b, set| {
            b.iter(|| {
                let (count, _) = set.mode();
                black_box(count)
            });
        });
        group.bench_with_input(BenchmarkId::new("variance_warm", n), &warm, |b, set| {
            b.iter(|| black_box(set.sample_variance()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_order_statistics,
    bench_lazy_trackers
);
criterion_main!(benches);
