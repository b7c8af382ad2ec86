#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for gradient descent training.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regline::prelude::*;

fn dataset(size: usize) -> Dataset {
    let pairs: Vec<(f64, f64)> = (0..size)
        .map(|i| {
            let x = i as f64 / size as f64 * 24.0;
            (x, 2.0 * x + 3.0 + (x * 1.7).sin())
        })
        .collect();
    Dataset::from_pairs(&pairs).expect("dataset should be non-empty")
}

fn train_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");
    group.sample_size(20);

    for size in [10, 100, 1_000] {
        let data = dataset(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Trainer::default().train(black_box(data)));
        });
    }

    group.finish();
}

fn mse_benchmark(c: &mut Criterion) {
    let data = dataset(1_000);
    let model = Model::new(2.0, 3.0);
    c.bench_function("compute_mse_1000", |b| b.iter(|| compute_mse(black_box(&data), black_box(&model))));
}

criterion_group!(benches, train_benchmark, mse_benchmark);
criterion_main!(benches);
