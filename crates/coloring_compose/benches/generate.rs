mod common;

use std::hint::black_box;

use coloring_compose::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for style in Style::ALL {
        for difficulty in [Difficulty::Toddler, Difficulty::Adult] {
            let request =
                GenerationRequest::new(ThemeId::Fantasy, style, difficulty).with_seed(42);
            let mut generator =
                Generator::with_sources(SequentialIds::new(), FixedClock(1_700_000_000_000));

            group.bench_with_input(
                BenchmarkId::new(style.as_str(), difficulty.as_str()),
                &request,
                |b, request| {
                    b.iter(|| {
                        let result = generator.generate(request);
                        black_box(result.map(|r| r.shapes.len()).unwrap_or(0));
                    });
                },
            );
        }
    }

    group.finish();
}

fn seed_sweep_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/seed_sweep");
    let seeds: Vec<u64> = (1..=64).collect();
    group.throughput(common::elements_throughput(seeds.len()));

    group.bench_function("scene_teen", |b| {
        let mut generator = Generator::with_sources(SequentialIds::new(), FixedClock(0));
        b.iter(|| {
            for &seed in &seeds {
                let request =
                    GenerationRequest::new(ThemeId::Random, Style::Scene, Difficulty::Teen)
                        .with_seed(seed);
                black_box(generator.generate(&request).ok());
            }
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = generate_benches, seed_sweep_benches
}
criterion_main!(benches);
