use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use random_search::prelude::*;

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_search_sphere");
    group.sample_size(10);

    for dims in [2usize, 10, 50] {
        let space = SearchSpace::new(-5.0, 5.0, dims).unwrap();
        group.bench_with_input(BenchmarkId::new("dims", dims), &space, |b, space| {
            b.iter(|| {
                let search = RandomSearch::with_seed(42);
                search.minimize(space, 1_000, Sphere).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_offset_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_search_offset_quadratic");
    group.sample_size(10);

    for dims in [2usize, 10] {
        let space = SearchSpace::new(-5.0, 5.0, dims).unwrap();
        group.bench_with_input(BenchmarkId::new("dims", dims), &space, |b, space| {
            b.iter(|| {
                let search = RandomSearch::with_seed(42);
                search
                    .minimize(space, 1_000, OffsetQuadratic::default())
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_offset_quadratic);
criterion_main!(benches);
