//! Selection utilities for choosing a [`ShapeArchetype`] from a theme palette.
//!
//! - [`pick_weighted_archetype`]: draws proportionally to each archetype's `weight`.
//! - [`has_selectable`]: whether any archetype can be drawn at all.
//!
//! Non-positive weights never win. A palette where every weight is `<= 0` is a
//! degenerate configuration; planners check [`has_selectable`] up front and return
//! an empty layout instead of looping.
use crate::catalog::ShapeArchetype;
use crate::rng::{RandomExt, RandomSource};

pub fn pick_weighted_archetype<'a>(
    archetypes: &'a [ShapeArchetype],
    rng: &mut dyn RandomSource,
) -> Option<&'a ShapeArchetype> {
    rng.weighted_pick(archetypes, |a| a.weight)
}

pub fn has_selectable(archetypes: &[ShapeArchetype]) -> bool {
    archetypes
        .iter()
        .any(|a| a.weight.is_finite() && a.weight > 0.0)
}
