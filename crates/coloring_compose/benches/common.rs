use std::time::Duration;

use coloring_compose::prelude::{ShapeArchetype, ShapeKind, ValueRange};
use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Synthetic palette of `count` archetypes cycling through every kind, with
/// weights spread over `[0.25, 1.25)`.
#[allow(dead_code)]
pub fn synthetic_palette(count: usize) -> Vec<ShapeArchetype> {
    const KINDS: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Star,
        ShapeKind::Heart,
        ShapeKind::Oval,
        ShapeKind::Diamond,
        ShapeKind::Wave,
    ];
    (0..count)
        .map(|i| {
            let weight = 0.25 + (i % 7) as f64 / 7.0;
            ShapeArchetype::new(KINDS[i % KINDS.len()], ValueRange::new(0.03, 0.08), weight)
                .with_rotation(0.5)
        })
        .collect()
}
