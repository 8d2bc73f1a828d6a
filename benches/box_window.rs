use boxwin::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const DIMENSIONS: [usize; 3] = [2, 3, 10];

fn benchmark_box_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_window");

    for &dim in &DIMENSIONS {
        let b = BoxWindow::unit(0.0, dim).unwrap();
        let points = BoxWindow::unit(0.0, dim)
            .unwrap()
            .rand(10_000, RngSource::Seed(1))
            .into_iter()
            .map(|p| p.into_iter().map(|x| 1.5 * x).collect())
            .collect::<Vec<Vec<f64>>>();

        group.bench_with_input(BenchmarkId::new("indicator_many", dim), &points, |bench, p| {
            bench.iter(|| b.indicator_many(p).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rand", dim), &dim, |bench, _| {
            bench.iter(|| b.rand(10_000, RngSource::Seed(2)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_box_window);
criterion_main!(benches);
