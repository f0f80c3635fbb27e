//! Free-scatter layout with focal pull, depth layers and bounded collision avoidance.
use glam::DVec2;

use crate::catalog::ShapeArchetype;
use crate::layout::rules::CompositionRules;
use crate::layout::selection::{has_selectable, pick_weighted_archetype};
use crate::layout::{
    rotation_for, spaced_overlap, LayoutOutcome, LayoutPlanner, PlacedShape, LAYER_COUNT,
    MIN_EXTENT,
};
use crate::rng::{RandomExt, RandomSource};

/// Size factor per layer: background shapes are drawn larger, foreground smaller.
pub const LAYER_DEPTH_FACTORS: [f64; LAYER_COUNT] = [1.3, 1.0, 0.7];

/// Focal pull strength per layer.
pub const LAYER_FOCAL_PULL: [f64; LAYER_COUNT] = [0.1, 0.4, 0.5];

/// Focal pull strength when layering is disabled.
pub const FLAT_FOCAL_PULL: f64 = 0.3;

/// Layer used for every shape when layering is disabled.
pub const FLAT_LAYER: u8 = 1;

/// How far a shape box may extend past the canvas edge, as a canvas fraction.
pub const OVERFLOW_TOLERANCE: f64 = 0.1;

/// Fraction of the target below which a shape is force-placed when no valid spot exists.
pub const FORCE_PLACEMENT_FLOOR: f64 = 0.8;

pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Free-scatter planner.
///
/// Places `target_count` shapes one at a time. Each candidate position is retried up
/// to `max_attempts` times against the canvas bounds and the boxes already placed;
/// while fewer than 80% of the target are down, a shape that found no spot is placed
/// anyway at its last candidate.
#[derive(Debug, Clone)]
pub struct FreeScatterLayout {
    pub target_count: usize,
    pub rules: CompositionRules,
    pub size_multiplier: f64,
    /// Floor for placed widths and heights.
    pub min_extent: f64,
    pub max_attempts: usize,
}

impl FreeScatterLayout {
    pub fn new(target_count: usize, rules: CompositionRules) -> Self {
        Self {
            target_count,
            rules,
            size_multiplier: 1.0,
            min_extent: MIN_EXTENT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_size_multiplier(mut self, size_multiplier: f64) -> Self {
        self.size_multiplier = size_multiplier;
        self
    }

    pub fn with_min_extent(mut self, min_extent: f64) -> Self {
        self.min_extent = min_extent.max(MIN_EXTENT);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn assign_layer(
        &self,
        archetype: &ShapeArchetype,
        counts: &[usize; LAYER_COUNT],
        rng: &mut dyn RandomSource,
    ) -> u8 {
        if !self.rules.layering {
            return FLAT_LAYER;
        }

        let layer = match archetype.layer_preference.fixed_layer() {
            Some(layer) => layer,
            None => rng.int_between(0, LAYER_COUNT - 1) as u8,
        };

        let cap = self.target_count.div_ceil(LAYER_COUNT);
        if counts[layer as usize] < cap {
            return layer;
        }

        (0..LAYER_COUNT)
            .min_by_key(|&l| counts[l])
            .map(|l| l as u8)
            .unwrap_or(layer)
    }

    fn extents(&self, archetype: &ShapeArchetype, layer: u8, rng: &mut dyn RandomSource) -> DVec2 {
        let depth = if self.rules.layering {
            LAYER_DEPTH_FACTORS[layer as usize]
        } else {
            1.0
        };
        let base = rng.between(archetype.size_range.min, archetype.size_range.max)
            * self.size_multiplier
            * depth;
        let aspect = rng.between(archetype.aspect_range.min, archetype.aspect_range.max);
        let (w, h) = if rng.chance(0.5) {
            (base, base * aspect)
        } else {
            (base * aspect, base)
        };
        DVec2::new(w, h).max(DVec2::splat(self.min_extent))
    }

    fn sample_position(&self, layer: u8, rng: &mut dyn RandomSource) -> DVec2 {
        let x = rng.next_f64();
        let y = rng.next_f64();
        let raw = DVec2::new(x, y);
        match self.rules.focal_point {
            Some(focal) => {
                let pull = if self.rules.layering {
                    LAYER_FOCAL_PULL[layer as usize]
                } else {
                    FLAT_FOCAL_PULL
                };
                raw.lerp(DVec2::from(focal), pull)
            }
            None => raw,
        }
    }
}

#[inline]
fn within_canvas(center: DVec2, half: DVec2) -> bool {
    let min = center - half;
    let max = center + half;
    min.x >= -OVERFLOW_TOLERANCE
        && min.y >= -OVERFLOW_TOLERANCE
        && max.x <= 1.0 + OVERFLOW_TOLERANCE
        && max.y <= 1.0 + OVERFLOW_TOLERANCE
}

impl LayoutPlanner for FreeScatterLayout {
    fn plan<'a>(
        &self,
        archetypes: &'a [ShapeArchetype],
        rng: &mut dyn RandomSource,
    ) -> LayoutOutcome<'a> {
        let mut outcome = LayoutOutcome::default();
        if self.target_count == 0 || !has_selectable(archetypes) {
            return outcome;
        }

        let spacing = self.rules.effective_spacing();
        let force_floor = self.target_count as f64 * FORCE_PLACEMENT_FLOOR;
        let mut layer_counts = [0usize; LAYER_COUNT];
        let mut placed: Vec<PlacedShape<'a>> = Vec::with_capacity(self.target_count);

        for _ in 0..self.target_count {
            let Some(archetype) = pick_weighted_archetype(archetypes, rng) else {
                break;
            };
            let layer = self.assign_layer(archetype, &layer_counts, rng);
            let size = self.extents(archetype, layer, rng);
            let half = size * 0.5;
            let rotation = rotation_for(archetype, rng);

            let mut candidate = DVec2::splat(0.5);
            let mut found = false;
            for _ in 0..self.max_attempts {
                outcome.stats.attempts += 1;
                candidate = self.sample_position(layer, rng);
                if !within_canvas(candidate, half) {
                    continue;
                }
                let collides = placed.iter().any(|other| {
                    spaced_overlap(candidate, half, other.center, other.half_extents(), spacing)
                });
                if !collides {
                    found = true;
                    break;
                }
            }

            let forced = !found && (placed.len() as f64) < force_floor;
            if !found && !forced {
                outcome.stats.skipped += 1;
                continue;
            }
            if forced {
                outcome.stats.forced += 1;
            }

            layer_counts[layer as usize] += 1;
            placed.push(PlacedShape {
                center: candidate,
                width: size.x,
                height: size.y,
                rotation,
                archetype,
                layer,
                forced,
            });
        }

        // Stable: shapes within a layer keep their placement order.
        placed.sort_by_key(|s| s.layer);
        outcome.shapes = placed;
        outcome
    }
}
