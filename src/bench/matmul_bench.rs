//! Criterion benchmarks comparing the two multiplication strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parmul::{multiply, multiply_parallel, Matrix};
use rand::Rng;

fn random_matrix(rows: usize, columns: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..rows)
        .map(|_| (0..columns).map(|_| rng.gen_range(-100..100)).collect())
        .collect();

    Matrix::from_rows(data).unwrap()
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &size in &[64usize, 128, 256] {
        let left = random_matrix(size, size);
        let right = random_matrix(size, size);

        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| multiply(black_box(&left), black_box(&right)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| multiply_parallel(black_box(&left), black_box(&right)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
