// benches/generator_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use figure_generator::FigureGenerator;

fn generator_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("GeneratorOperations");

    group.bench_function("create_triangle_bound_1000", |b| {
        let mut generator = FigureGenerator::seeded(1000, 17);
        b.iter(|| black_box(generator.create_triangle()))
    });

    group.bench_function("create_figures_100", |b| {
        let mut generator = FigureGenerator::seeded(1000, 17);
        b.iter(|| black_box(generator.create_figures(black_box(100))))
    });
    group.finish();
}

criterion_group!(benches, generator_benchmark_fn);
criterion_main!(benches);
