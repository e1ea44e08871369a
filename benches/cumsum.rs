//! Benchmarks for cumulative pairwise summation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pwsum::cusum;
use rand::prelude::*;

fn random_vec(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_cusum(c: &mut Criterion) {
    let mut group = c.benchmark_group("cusum");

    for n in [128, 1024, 16_384, 262_144] {
        let x = random_vec(n);
        let mut y = vec![0.0; n];

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |bench, &n| {
            bench.iter(|| {
                cusum(n, 0.0, black_box(&x), 1, &mut y, 1);
                black_box(y[n - 1])
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cusum);
criterion_main!(benches);
