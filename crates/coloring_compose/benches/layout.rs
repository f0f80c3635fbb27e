mod common;

use std::hint::black_box;

use coloring_compose::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn free_scatter_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/free_scatter");
    let palette = theme(ThemeId::Garden).archetypes;

    for &target in &[8usize, 18, 64, 256] {
        for density in [Density::Sparse, Density::Dense] {
            let rules = CompositionRules::new()
                .with_focal_point([0.5, 0.55])
                .with_density(density);
            let layout = FreeScatterLayout::new(target, rules);
            group.throughput(common::elements_throughput(target));

            group.bench_with_input(
                BenchmarkId::new(density.as_str(), target),
                &target,
                |b, _| {
                    b.iter(|| {
                        let (outcome, state) = layout.plan_seeded(palette, 0xC0FFEE);
                        black_box((outcome.shapes.len(), state));
                    });
                },
            );
        }
    }

    group.finish();
}

fn geometric_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/geometric");
    let palette = theme(ThemeId::Sea).archetypes;

    for &(rings, per_ring) in &[(3usize, 6.0f64), (6, 12.0), (12, 16.0)] {
        let layout = MandalaLayout::new(rings, per_ring);
        let count: usize = (0..rings).map(|r| layout.ring_count(r)).sum();
        group.throughput(common::elements_throughput(count));

        group.bench_with_input(BenchmarkId::new("mandala", count), &count, |b, _| {
            b.iter(|| black_box(layout.plan_seeded(palette, 7).0.shapes.len()));
        });
    }

    for &side in &[4usize, 16, 64] {
        let layout = GridLayout::new(side, side, 0.15);
        group.throughput(common::elements_throughput(side * side));

        group.bench_with_input(BenchmarkId::new("grid", side), &side, |b, _| {
            b.iter(|| black_box(layout.plan_seeded(palette, 7).0.shapes.len()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = free_scatter_benches, geometric_benches
}
criterion_main!(benches);
