//! Benchmarks for the plain pairwise sum against a naive fold.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pwsum::sum;
use rand::prelude::*;

fn random_vec(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for n in [8, 64, 128, 1024, 16_384, 262_144] {
        let x = random_vec(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("pairwise", n), &n, |bench, &n| {
            bench.iter(|| sum(n, black_box(&x), 1))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| black_box(&x).iter().sum::<f64>())
        });
    }

    group.finish();
}

fn bench_sum_negative_stride(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_reverse");

    for n in [1024, 262_144] {
        let x = random_vec(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("stride_-1", n), &n, |bench, &n| {
            bench.iter(|| sum(n, black_box(&x), -1))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_sum_negative_stride);
criterion_main!(benches);
