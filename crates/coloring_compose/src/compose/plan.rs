//! Composition plans: the ordered placement passes a style expands into.
use std::f64::consts::PI;

use crate::catalog::{difficulty_profile, Difficulty};
use crate::compose::overlay::PassOverlay;
use crate::compose::style::Style;
use crate::layout::grid::GRID_MARGIN;
use crate::layout::{
    CompositionRules, Density, FreeScatterLayout, GridFrame, GridLayout, LayoutPlanner,
    MandalaLayout,
};
use crate::rng::{RandomExt, RandomSource};

/// Mandala `(rings, shapes_per_ring)` per difficulty tier.
pub const MANDALA_RINGS: [(usize, f64); 4] = [(2, 4.0), (3, 5.0), (4, 6.0), (5, 8.0)];

/// Primary kaleidoscope `(rings, shapes_per_ring)` per difficulty tier.
pub const KALEIDOSCOPE_RINGS: [(usize, f64); 4] = [(3, 6.0), (4, 8.0), (5, 10.0), (6, 12.0)];

/// Square grid side per difficulty tier, shared by pattern and mosaic.
pub const GRID_SIDES: [usize; 4] = [3, 4, 5, 6];

pub const PATTERN_JITTER: f64 = 0.15;

pub const KALEIDOSCOPE_OVERLAY_SCALE: f64 = 0.8;
pub const KALEIDOSCOPE_SEED_OFFSET: u32 = 100;

pub const MOSAIC_BASE_SCALE: f64 = 1.1;
pub const MOSAIC_BASE_JITTER: f64 = 0.1;
pub const MOSAIC_OVERLAY_SCALE: f64 = 0.9;
pub const MOSAIC_OVERLAY_JITTER: f64 = 0.15;
pub const MOSAIC_SEED_OFFSET: u32 = 50;
pub const MOSAIC_OVERLAY_LAYER: u8 = 1;

/// Where a pass draws its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassSeed {
    /// Continue the generation's shared generator.
    #[default]
    Shared,
    /// A fresh generator seeded with the generation seed plus this offset.
    Offset(u32),
}

/// A single placement pass in a [`CompositionPlan`].
#[non_exhaustive]
pub struct Pass {
    /// Identifier used in logs and events.
    pub id: String,
    pub planner: Box<dyn LayoutPlanner>,
    pub seed: PassSeed,
    /// Transform applied to the pass output before merging.
    pub overlay: Option<PassOverlay>,
}

impl Pass {
    pub fn new(id: impl Into<String>, planner: Box<dyn LayoutPlanner>) -> Self {
        Self {
            id: id.into(),
            planner,
            seed: PassSeed::Shared,
            overlay: None,
        }
    }

    /// Create a new pass from a concrete planner.
    pub fn new_with<P: LayoutPlanner + 'static>(id: impl Into<String>, planner: P) -> Self {
        Self::new(id, Box::new(planner))
    }

    pub fn with_seed_offset(mut self, offset: u32) -> Self {
        self.seed = PassSeed::Offset(offset);
        self
    }

    pub fn with_overlay(mut self, overlay: PassOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }
}

/// Ordered passes; later passes paint over earlier ones.
#[derive(Default)]
#[non_exhaustive]
pub struct CompositionPlan {
    pub passes: Vec<Pass>,
}

impl CompositionPlan {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn with_pass(mut self, pass: Pass) -> Self {
        self.passes.push(pass);
        self
    }

    pub fn with_passes(mut self, passes: Vec<Pass>) -> Self {
        self.passes.extend(passes);
        self
    }
}

/// Expand `style` at `difficulty` into a plan.
///
/// Free-scatter styles draw their target count from `rng`, so this must run on the
/// generation's shared generator before any pass does.
pub fn build_plan(
    style: Style,
    difficulty: Difficulty,
    rules: &CompositionRules,
    rng: &mut dyn RandomSource,
) -> CompositionPlan {
    let profile = difficulty_profile(difficulty);
    let tier = difficulty.tier();
    let mult = profile.size_multiplier;

    match style {
        Style::Scene | Style::Freeform => {
            let target = rng.int_between(profile.shape_count.min, profile.shape_count.max);
            let rules = if style == Style::Freeform {
                rules
                    .clone()
                    .with_layering(false)
                    .with_density(Density::Medium)
            } else {
                rules.clone()
            };
            let layout = FreeScatterLayout::new(target, rules)
                .with_size_multiplier(mult)
                .with_min_extent(profile.min_region_size);
            CompositionPlan::new().with_pass(Pass::new_with(style.as_str(), layout))
        }
        Style::Mandala => {
            let (rings, per_ring) = MANDALA_RINGS[tier];
            let layout = MandalaLayout::new(rings, per_ring).with_size_multiplier(mult);
            CompositionPlan::new().with_pass(Pass::new_with("mandala", layout))
        }
        Style::Kaleidoscope => {
            let (rings, per_ring) = KALEIDOSCOPE_RINGS[tier];
            let primary = MandalaLayout::new(rings, per_ring).with_size_multiplier(mult);
            let overlay = MandalaLayout::new(rings.saturating_sub(1), per_ring - 2.0)
                .with_size_multiplier(mult * KALEIDOSCOPE_OVERLAY_SCALE);
            CompositionPlan::new()
                .with_pass(Pass::new_with("kaleidoscope", primary))
                .with_pass(
                    Pass::new_with("kaleidoscope-overlay", overlay)
                        .with_seed_offset(KALEIDOSCOPE_SEED_OFFSET)
                        .with_overlay(PassOverlay::new().with_rotation_offset(PI / per_ring)),
                )
        }
        Style::Pattern => {
            let side = GRID_SIDES[tier];
            let layout = GridLayout::new(side, side, PATTERN_JITTER).with_size_multiplier(mult);
            CompositionPlan::new().with_pass(Pass::new_with("pattern", layout))
        }
        Style::Mosaic => {
            let side = GRID_SIDES[tier];
            let base_frame = GridFrame::inset(side, side, GRID_MARGIN);
            let base = GridLayout::new(side, side, MOSAIC_BASE_JITTER)
                .with_size_multiplier(mult * MOSAIC_BASE_SCALE)
                .with_frame(base_frame);
            let overlay = GridLayout::new(
                side.saturating_sub(1),
                side.saturating_sub(1),
                MOSAIC_OVERLAY_JITTER,
            )
            .with_size_multiplier(mult * MOSAIC_OVERLAY_SCALE)
            .with_frame(base_frame.shifted_half_cell());
            CompositionPlan::new()
                .with_pass(Pass::new_with("mosaic", base))
                .with_pass(
                    Pass::new_with("mosaic-overlay", overlay)
                        .with_seed_offset(MOSAIC_SEED_OFFSET)
                        .with_overlay(PassOverlay::new().with_layer(MOSAIC_OVERLAY_LAYER)),
                )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::style::default_rules;
    use crate::rng::ParkMiller;

    fn plan_for(style: Style, difficulty: Difficulty) -> CompositionPlan {
        let mut rng = ParkMiller::new(5);
        build_plan(style, difficulty, &default_rules(style), &mut rng)
    }

    #[test]
    fn single_pass_styles() {
        for style in [Style::Scene, Style::Freeform, Style::Mandala, Style::Pattern] {
            let plan = plan_for(style, Difficulty::Kid);
            assert_eq!(plan.passes.len(), 1, "{style}");
            assert_eq!(plan.passes[0].seed, PassSeed::Shared);
            assert!(plan.passes[0].overlay.is_none());
        }
    }

    #[test]
    fn overlay_styles_use_offset_seeds() {
        let plan = plan_for(Style::Kaleidoscope, Difficulty::Teen);
        assert_eq!(plan.passes.len(), 2);
        assert_eq!(
            plan.passes[1].seed,
            PassSeed::Offset(KALEIDOSCOPE_SEED_OFFSET)
        );
        let overlay = plan.passes[1].overlay.unwrap_or_default();
        assert!((overlay.rotation_offset - PI / 10.0).abs() < 1e-12);
        assert_eq!(overlay.layer, None);

        let plan = plan_for(Style::Mosaic, Difficulty::Toddler);
        assert_eq!(plan.passes[1].seed, PassSeed::Offset(MOSAIC_SEED_OFFSET));
        assert_eq!(
            plan.passes[1].overlay.and_then(|o| o.layer),
            Some(MOSAIC_OVERLAY_LAYER)
        );
    }

    #[test]
    fn pass_builder_sets_optional_fields() {
        let pass = Pass::new_with("p", MandalaLayout::new(1, 3.0))
            .with_seed_offset(9)
            .with_overlay(PassOverlay::new().with_layer(2));
        assert_eq!(pass.id, "p");
        assert_eq!(pass.seed, PassSeed::Offset(9));
        assert_eq!(pass.overlay.and_then(|o| o.layer), Some(2));

        let plan = CompositionPlan::new().with_passes(vec![pass]);
        assert_eq!(plan.passes.len(), 1);
    }
}
