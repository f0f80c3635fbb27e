//! Layout planners that turn archetype palettes into positioned shapes.
//!
//! Every planner implements [`LayoutPlanner`] and produces [`PlacedShape`]s in
//! normalized canvas coordinates (`0..1` on both axes, origin top-left). Placements
//! are transient: the synthesizer consumes them and emits concrete descriptors.
use glam::DVec2;

use crate::catalog::ShapeArchetype;
use crate::rng::{ParkMiller, RandomExt, RandomSource};

pub mod free_scatter;
pub mod grid;
pub mod mandala;
pub mod rules;
pub mod selection;

pub use free_scatter::FreeScatterLayout;
pub use grid::{GridFrame, GridLayout};
pub use mandala::MandalaLayout;
pub use rules::{CompositionRules, Density, FocalPoint};

/// Lower bound for any placed width or height.
pub(crate) const MIN_EXTENT: f64 = 1e-3;

/// Number of depth layers (back, mid, front).
pub const LAYER_COUNT: usize = 3;

/// A positioned, sized and rotated archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape<'a> {
    /// Center in canvas fractions.
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
    /// Radians.
    pub rotation: f64,
    pub archetype: &'a ShapeArchetype,
    /// Depth bucket in `0..=2`, painted back to front.
    pub layer: u8,
    /// Set when the shape was placed without finding a collision-free spot.
    pub forced: bool,
}

impl PlacedShape<'_> {
    pub fn half_extents(&self) -> DVec2 {
        DVec2::new(self.width, self.height) * 0.5
    }
}

/// Counters describing one placement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Candidate positions tried.
    pub attempts: usize,
    /// Shapes placed despite failing the collision checks.
    pub forced: usize,
    /// Shapes dropped because no valid position was found.
    pub skipped: usize,
}

/// Output of a planner.
#[derive(Debug, Clone, Default)]
pub struct LayoutOutcome<'a> {
    /// Shapes in paint order (back to front).
    pub shapes: Vec<PlacedShape<'a>>,
    pub stats: PassStats,
}

/// A layout algorithm.
pub trait LayoutPlanner: Send + Sync {
    fn plan<'a>(
        &self,
        archetypes: &'a [ShapeArchetype],
        rng: &mut dyn RandomSource,
    ) -> LayoutOutcome<'a>;

    /// Runs the planner on a fresh [`ParkMiller`] generator and returns the final
    /// generator state for chaining.
    fn plan_seeded<'a>(
        &self,
        archetypes: &'a [ShapeArchetype],
        seed: u64,
    ) -> (LayoutOutcome<'a>, u32) {
        let mut rng = ParkMiller::new(seed);
        let outcome = self.plan(archetypes, &mut rng);
        (outcome, rng.state())
    }
}

/// Rotation for an archetype: uniform in `[-max, max]` when rotatable, else exactly 0.
pub(crate) fn rotation_for(archetype: &ShapeArchetype, rng: &mut dyn RandomSource) -> f64 {
    if archetype.can_rotate {
        rng.between(-archetype.max_rotation, archetype.max_rotation)
    } else {
        0.0
    }
}

/// Whether two boxes, kept `spacing` apart, collide.
#[inline]
pub(crate) fn spaced_overlap(
    a_center: DVec2,
    a_half: DVec2,
    b_center: DVec2,
    b_half: DVec2,
    spacing: f64,
) -> bool {
    let d = (a_center - b_center).abs();
    let reach = a_half + b_half + DVec2::splat(spacing);
    d.x < reach.x && d.y < reach.y
}
