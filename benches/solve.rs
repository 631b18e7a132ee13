//! Solver performance benchmarks (Criterion).
//!
//! Run: `cargo bench` or `cargo bench --bench solve`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use stable_matching_engine::{Engine, RandomTableConfig, TableGenerator};

const SIZES: [usize; 4] = [10, 50, 100, 500];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let engine = TableGenerator::new(RandomTableConfig { seed: 42, size }).engine();
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| engine.solve())
        });
    }
    group.finish();
}

fn bench_construct_and_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_and_solve");
    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_batched(
                || {
                    let mut generator = TableGenerator::new(RandomTableConfig { seed: 7, size });
                    (generator.table(), generator.table())
                },
                |(proposers, acceptors)| {
                    let engine = Engine::new(proposers, acceptors).unwrap();
                    engine.solve()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_is_stable(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_stable");
    for size in SIZES {
        let engine = TableGenerator::new(RandomTableConfig { seed: 99, size }).engine();
        let matching = engine.solve();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| engine.is_stable(&matching))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_construct_and_solve, bench_is_stable);
criterion_main!(benches);
