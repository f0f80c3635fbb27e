//! Radial (mandala) layout strategy.
use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;

use crate::catalog::ShapeArchetype;
use crate::layout::selection::{has_selectable, pick_weighted_archetype};
use crate::layout::{LayoutOutcome, LayoutPlanner, PlacedShape, LAYER_COUNT, MIN_EXTENT};
use crate::rng::{RandomExt, RandomSource};

/// Radius of the outermost ring, as a canvas fraction.
pub const DEFAULT_MAX_RADIUS: f64 = 0.4;

/// Size reduction per ring step outward.
pub const RING_SIZE_FALLOFF: f64 = 0.15;

/// Concentric rings of identical shapes around the canvas center.
///
/// Ring `r` holds `floor(shapes_per_ring * (r + 1))` copies of a single archetype,
/// evenly spaced starting at the top. One archetype and one size are drawn per ring,
/// so every ring is rotationally symmetric.
#[derive(Debug, Clone)]
pub struct MandalaLayout {
    pub rings: usize,
    pub shapes_per_ring: f64,
    pub size_multiplier: f64,
    pub max_radius: f64,
    pub center: DVec2,
}

impl MandalaLayout {
    pub fn new(rings: usize, shapes_per_ring: f64) -> Self {
        Self {
            rings,
            shapes_per_ring: shapes_per_ring.max(0.0),
            size_multiplier: 1.0,
            max_radius: DEFAULT_MAX_RADIUS,
            center: DVec2::splat(0.5),
        }
    }

    pub fn with_size_multiplier(mut self, size_multiplier: f64) -> Self {
        self.size_multiplier = size_multiplier;
        self
    }

    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Number of shapes on ring `ring` (0-based).
    pub fn ring_count(&self, ring: usize) -> usize {
        (self.shapes_per_ring * (ring + 1) as f64).floor() as usize
    }
}

impl LayoutPlanner for MandalaLayout {
    fn plan<'a>(
        &self,
        archetypes: &'a [ShapeArchetype],
        rng: &mut dyn RandomSource,
    ) -> LayoutOutcome<'a> {
        let mut outcome = LayoutOutcome::default();
        if self.rings == 0 || !has_selectable(archetypes) {
            return outcome;
        }

        for ring in 0..self.rings {
            let count = self.ring_count(ring);
            if count == 0 {
                continue;
            }
            let Some(archetype) = pick_weighted_archetype(archetypes, rng) else {
                break;
            };

            let radius = self.max_radius * (ring + 1) as f64 / self.rings as f64;
            let falloff = 1.0 - ring as f64 * RING_SIZE_FALLOFF;
            let size = (rng.between(archetype.size_range.min, archetype.size_range.max)
                * self.size_multiplier
                * falloff)
                .max(MIN_EXTENT);
            // Rings past the front layer share it; emission order keeps outer rings on top.
            let layer = ring.min(LAYER_COUNT - 1) as u8;

            for i in 0..count {
                let angle = TAU * i as f64 / count as f64 - FRAC_PI_2;
                let offset = DVec2::from_angle(angle) * radius;
                let rotation = if archetype.can_rotate {
                    angle + FRAC_PI_2
                } else {
                    0.0
                };
                outcome.shapes.push(PlacedShape {
                    center: self.center + offset,
                    width: size,
                    height: size,
                    rotation,
                    archetype,
                    layer,
                    forced: false,
                });
            }
        }

        outcome
    }
}
