//! High-level runner turning requests into shape lists.
use tracing::{debug, info, warn};

use crate::catalog::{theme, ShapeArchetype, ThemeId};
use crate::compose::events::{EventSink, GenerationEvent, GenerationEventKind};
use crate::compose::plan::{build_plan, CompositionPlan, PassSeed};
use crate::compose::request::{GenerationMetadata, GenerationRequest, GenerationResult};
use crate::error::Result;
use crate::layout::selection::has_selectable;
use crate::layout::PlacedShape;
use crate::rng::{normalize_seed, offset_seed, ParkMiller, RandomExt, RandomSource};
use crate::synth::{synthesize, Clock, IdSource, SequentialIds, SystemClock};

/// Offset between the placement seed and the seed of the synthesis generator.
pub const SYNTHESIS_SEED_OFFSET: u64 = 1;

/// Offset between the placement seed and the stream that resolves a random theme.
pub const THEME_SEED_OFFSET: u64 = 7;

/// Draws discarded from the theme stream before picking; early outputs track small seeds.
const THEME_WARMUP_DRAWS: usize = 8;

/// Generates pages, drawing shape ids and timestamps from injected sources.
#[derive(Debug, Clone, Default)]
pub struct Generator<I = SequentialIds, C = SystemClock> {
    ids: I,
    clock: C,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdSource, C: Clock> Generator<I, C> {
    pub fn with_sources(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    pub fn ids(&self) -> &I {
        &self.ids
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Runs the request, returning the result.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<GenerationResult> {
        self.generate_with_events(request, &mut ())
    }

    pub fn generate_with_events(
        &mut self,
        request: &GenerationRequest,
        sink: &mut dyn EventSink,
    ) -> Result<GenerationResult> {
        request.validate()?;

        let now = self.clock.now_millis();
        let seed = normalize_seed(request.seed.unwrap_or(now));
        let mut rng = ParkMiller::new(seed as u64);

        let resolved_theme = resolve_theme(request.theme, seed);
        let rules = request.effective_rules();
        let plan = build_plan(request.style, request.difficulty, &rules, &mut rng);

        info!(
            "Generating {} / {} / {} with seed {}.",
            resolved_theme, request.style, request.difficulty, seed
        );
        if sink.wants(GenerationEventKind::GenerationStarted) {
            sink.send(GenerationEvent::GenerationStarted {
                seed,
                theme: resolved_theme,
                style: request.style,
                difficulty: request.difficulty,
                pass_count: plan.passes.len(),
            });
        }

        let archetypes = theme(resolved_theme).archetypes;
        let placed = run_plan(&plan, archetypes, seed, &mut rng, sink);

        let mut synth_rng = ParkMiller::new(offset_seed(seed, SYNTHESIS_SEED_OFFSET) as u64);
        let shapes = synthesize(&placed, &mut synth_rng, &mut self.ids, now);

        if sink.wants(GenerationEventKind::GenerationFinished) {
            sink.send(GenerationEvent::GenerationFinished {
                seed,
                shape_count: shapes.len(),
            });
        }

        let metadata = GenerationMetadata {
            seed,
            theme: request.theme,
            resolved_theme,
            style: request.style,
            difficulty: request.difficulty,
            composition_rules: rules,
            shape_count: shapes.len(),
            generated_at: now,
        };
        Ok(GenerationResult { shapes, metadata })
    }
}

/// Generates with a fresh [`Generator`] using sequential ids and the system clock.
pub fn generate(request: &GenerationRequest) -> Result<GenerationResult> {
    Generator::new().generate(request)
}

/// Resolves [`ThemeId::Random`] from its own stream seeded off `seed`.
///
/// The placement stream is left untouched, so a random request places shapes
/// exactly like a request for the theme it resolved to.
pub fn resolve_theme(requested: ThemeId, seed: u32) -> ThemeId {
    match requested {
        ThemeId::Random => {
            let mut rng = ParkMiller::new(offset_seed(seed, THEME_SEED_OFFSET) as u64);
            for _ in 0..THEME_WARMUP_DRAWS {
                rng.next_f64();
            }
            rng.pick(&ThemeId::CONCRETE).copied().unwrap_or(ThemeId::Sea)
        }
        concrete => concrete,
    }
}

/// Runs every pass of `plan` and merges the outputs in pass order.
///
/// [`PassSeed::Shared`] passes draw from `rng`; offset passes get a fresh generator
/// seeded `seed + offset` (see [`offset_seed`]).
pub fn run_plan<'a>(
    plan: &CompositionPlan,
    archetypes: &'a [ShapeArchetype],
    seed: u32,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) -> Vec<PlacedShape<'a>> {
    if plan.passes.is_empty() {
        warn!("Composition plan has no passes.");
        if sink.wants(GenerationEventKind::Warning) {
            sink.send(GenerationEvent::Warning {
                context: "plan".into(),
                message: "Composition plan has no passes".into(),
            });
        }
    }
    if !has_selectable(archetypes) {
        warn!("No archetype carries a positive weight; every pass will be empty.");
        if sink.wants(GenerationEventKind::Warning) {
            sink.send(GenerationEvent::Warning {
                context: "archetypes".into(),
                message: "No archetype carries a positive weight".into(),
            });
        }
    }

    let mut all_placed: Vec<PlacedShape<'a>> = Vec::new();

    for (index, pass) in plan.passes.iter().enumerate() {
        info!("Pass {}: '{}'.", index, pass.id);
        if sink.wants(GenerationEventKind::PassStarted) {
            sink.send(GenerationEvent::PassStarted {
                index,
                id: pass.id.clone(),
            });
        }

        let mut outcome = match pass.seed {
            PassSeed::Shared => pass.planner.plan(archetypes, rng),
            PassSeed::Offset(offset) => {
                let mut pass_rng = ParkMiller::new(offset_seed(seed, offset as u64) as u64);
                pass.planner.plan(archetypes, &mut pass_rng)
            }
        };
        if let Some(overlay) = &pass.overlay {
            overlay.apply(&mut outcome.shapes);
        }

        if outcome.stats.forced > 0 {
            warn!(
                "Pass '{}' force-placed {} shape(s) after exhausting attempts.",
                pass.id, outcome.stats.forced
            );
        }
        debug!(
            "Pass '{}' placed {} shape(s): {} attempts, {} forced, {} skipped.",
            pass.id,
            outcome.shapes.len(),
            outcome.stats.attempts,
            outcome.stats.forced,
            outcome.stats.skipped
        );

        for shape in &outcome.shapes {
            if sink.wants(GenerationEventKind::ShapePlaced) {
                sink.send(GenerationEvent::ShapePlaced {
                    pass_index: index,
                    kind: shape.archetype.kind,
                    center: shape.center,
                    layer: shape.layer,
                });
            }
            if shape.forced && sink.wants(GenerationEventKind::PlacementForced) {
                sink.send(GenerationEvent::PlacementForced {
                    pass_index: index,
                    kind: shape.archetype.kind,
                    center: shape.center,
                });
            }
        }

        if sink.wants(GenerationEventKind::PassFinished) {
            sink.send(GenerationEvent::PassFinished {
                index,
                id: pass.id.clone(),
                placed: outcome.shapes.len(),
                stats: outcome.stats,
            });
        }

        all_placed.extend(outcome.shapes);
    }

    all_placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{difficulty_profile, Difficulty, ShapeKind, ValueRange};
    use crate::compose::events::VecSink;
    use crate::compose::plan::{Pass, GRID_SIDES, KALEIDOSCOPE_RINGS, MANDALA_RINGS};
    use crate::compose::style::{default_rules, Style};
    use crate::error::Error;
    use crate::layout::grid::GRID_MARGIN;
    use crate::layout::{CompositionRules, Density, GridFrame, MandalaLayout};
    use crate::rng::MODULUS;
    use crate::synth::{FixedClock, ShapeGeometry};

    const NOW: u64 = 1_700_000_000_000;

    fn generator() -> Generator<SequentialIds, FixedClock> {
        Generator::with_sources(SequentialIds::new(), FixedClock(NOW))
    }

    fn request(
        theme: ThemeId,
        style: Style,
        difficulty: Difficulty,
        seed: u64,
    ) -> GenerationRequest {
        GenerationRequest::new(theme, style, difficulty).with_seed(seed)
    }

    #[test]
    fn mandala_space_toddler_has_two_rings() {
        let req = request(ThemeId::Space, Style::Mandala, Difficulty::Toddler, 42);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.shapes.len(), 12);
        assert_eq!(result.metadata.shape_count, 12);
        assert_eq!(result.metadata.seed, 42);
        assert_eq!(result.metadata.resolved_theme, ThemeId::Space);
        assert_eq!(MANDALA_RINGS[0], (2, 4.0));
    }

    #[test]
    fn pattern_garden_kid_fills_a_jittered_four_by_four_grid() {
        let req = request(ThemeId::Garden, Style::Pattern, Difficulty::Kid, 7);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.shapes.len(), 16);

        let frame = GridFrame::inset(4, 4, GRID_MARGIN);
        for (idx, shape) in result.shapes.iter().enumerate() {
            let expected = frame.cell_center(idx % 4, idx / 4);
            let (x, y) = shape.geometry.center();
            assert!((x - expected.x).abs() <= 0.15 * frame.cell.x + 1e-9, "shape {idx}");
            assert!((y - expected.y).abs() <= 0.15 * frame.cell.y + 1e-9, "shape {idx}");
        }
    }

    #[test]
    fn same_request_is_deterministic() {
        for style in Style::ALL {
            for difficulty in Difficulty::ALL {
                let req = request(ThemeId::Fantasy, style, difficulty, 1234);
                let a = generator().generate(&req).unwrap();
                let b = generator().generate(&req).unwrap();
                assert_eq!(a, b, "{style} / {difficulty}");
            }
        }
    }

    #[test]
    fn regenerating_from_metadata_reproduces_the_page() {
        let req = GenerationRequest::new(ThemeId::Random, Style::Scene, Difficulty::Teen);
        let first = generator().generate(&req).unwrap();
        assert_eq!(first.metadata.seed, normalize_seed(NOW));

        let again = generator().generate(&first.regenerate_request()).unwrap();
        assert_eq!(again.shapes, first.shapes);
        assert_eq!(again.metadata.seed, first.metadata.seed);
        assert_eq!(again.metadata.resolved_theme, first.metadata.resolved_theme);
    }

    #[test]
    fn regenerating_keeps_custom_rules() {
        let rules = CompositionRules::new()
            .with_density(Density::Sparse)
            .with_min_spacing(0.08)
            .with_focal_point([0.2, 0.2]);
        let req = request(ThemeId::Sea, Style::Scene, Difficulty::Adult, 2024)
            .with_composition_rules(rules.clone());
        let first = generator().generate(&req).unwrap();
        assert_eq!(first.metadata.composition_rules, rules);

        let replay = first.regenerate_request();
        assert_eq!(replay.composition_rules.as_ref(), Some(&rules));
        let again = generator().generate(&replay).unwrap();
        assert_eq!(again.shapes, first.shapes);
    }

    #[test]
    fn metadata_records_style_default_rules() {
        let req = request(ThemeId::Garden, Style::Pattern, Difficulty::Kid, 11);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.metadata.composition_rules, default_rules(Style::Pattern));
    }

    #[test]
    fn zero_seed_is_remapped() {
        let req = request(ThemeId::Sea, Style::Pattern, Difficulty::Kid, 0);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.metadata.seed, MODULUS - 1);
    }

    #[test]
    fn random_theme_resolves_to_a_concrete_one() {
        let mut seen = Vec::new();
        for seed in 1..40u64 {
            let req = request(ThemeId::Random, Style::Mandala, Difficulty::Kid, seed);
            let result = generator().generate(&req).unwrap();
            assert_eq!(result.metadata.theme, ThemeId::Random);
            assert!(ThemeId::CONCRETE.contains(&result.metadata.resolved_theme));
            if !seen.contains(&result.metadata.resolved_theme) {
                seen.push(result.metadata.resolved_theme);
            }
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn small_seeds_reach_every_theme() {
        let mut counts = [0usize; 4];
        for seed in 1..400u32 {
            let resolved = resolve_theme(ThemeId::Random, seed);
            let idx = ThemeId::CONCRETE
                .iter()
                .position(|t| *t == resolved)
                .unwrap();
            counts[idx] += 1;
        }
        assert!(counts.iter().all(|&n| n > 50), "{counts:?}");
        assert_eq!(resolve_theme(ThemeId::Garden, 9), ThemeId::Garden);
    }

    #[test]
    fn random_theme_leaves_placement_untouched() {
        for seed in [7u64, 42, 314_159] {
            let random = request(ThemeId::Random, Style::Scene, Difficulty::Kid, seed);
            let first = generator().generate(&random).unwrap();
            let concrete = request(
                first.metadata.resolved_theme,
                Style::Scene,
                Difficulty::Kid,
                seed,
            );
            let second = generator().generate(&concrete).unwrap();
            assert_eq!(first.shapes, second.shapes);
        }
    }

    #[test]
    fn synthesis_stream_differs_from_placement_at_the_top_seed() {
        let top = MODULUS - 1;
        assert_ne!(offset_seed(top, SYNTHESIS_SEED_OFFSET), top);
        let req = request(ThemeId::Space, Style::Scene, Difficulty::Teen, top as u64);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.metadata.seed, top);
        assert!(!result.shapes.is_empty());
    }

    #[test]
    fn scene_counts_respect_difficulty_bounds() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty_profile(difficulty);
            for seed in [3u64, 17, 99, 2024] {
                for style in [Style::Scene, Style::Freeform] {
                    let req = request(ThemeId::Sea, style, difficulty, seed);
                    let n = generator().generate(&req).unwrap().shapes.len();
                    assert!(n <= profile.shape_count.max, "{style} {difficulty} {seed}");
                    assert!(
                        n as f64 >= 0.8 * profile.shape_count.min as f64,
                        "{style} {difficulty} {seed}: {n}"
                    );
                }
            }
        }
    }

    #[test]
    fn scene_output_is_painted_back_to_front() {
        let archetypes = theme(ThemeId::Garden).archetypes;
        for seed in [1u32, 8, 77] {
            let mut rng = ParkMiller::new(seed as u64);
            let plan = build_plan(
                Style::Scene,
                Difficulty::Adult,
                &default_rules(Style::Scene),
                &mut rng,
            );
            let placed = run_plan(&plan, archetypes, seed, &mut rng, &mut ());
            assert!(!placed.is_empty());
            assert!(placed.windows(2).all(|w| w[0].layer <= w[1].layer));
            assert!(placed.iter().all(|s| s.layer <= 2));
        }
    }

    #[test]
    fn output_kinds_are_always_native() {
        for theme_id in ThemeId::CONCRETE {
            for style in Style::ALL {
                let req = request(theme_id, style, Difficulty::Adult, 555);
                let result = generator().generate(&req).unwrap();
                assert!(result.shapes.iter().all(|s| s.kind().is_native()));
                assert!(result
                    .shapes
                    .iter()
                    .all(|s| s.stroke_color == "#000000" && s.created_at == NOW));
            }
        }
    }

    #[test]
    fn overlay_styles_append_a_second_pass() {
        let req = request(ThemeId::Space, Style::Kaleidoscope, Difficulty::Toddler, 42);
        let result = generator().generate(&req).unwrap();
        let (rings, per_ring) = KALEIDOSCOPE_RINGS[0];
        let primary: usize = (0..rings)
            .map(|r| MandalaLayout::new(rings, per_ring).ring_count(r))
            .sum();
        let overlay: usize = (0..rings - 1)
            .map(|r| MandalaLayout::new(rings - 1, per_ring - 2.0).ring_count(r))
            .sum();
        assert_eq!(result.shapes.len(), primary + overlay);

        let side = GRID_SIDES[1];
        let req = request(ThemeId::Sea, Style::Mosaic, Difficulty::Kid, 42);
        let result = generator().generate(&req).unwrap();
        assert_eq!(result.shapes.len(), side * side + (side - 1) * (side - 1));

        // Overlay cells are centered on the base grid's inner corners.
        let base = GridFrame::inset(side, side, GRID_MARGIN);
        let shifted = base.shifted_half_cell();
        for (idx, shape) in result.shapes[side * side..].iter().enumerate() {
            let corner = shifted.cell_center(idx % (side - 1), idx / (side - 1));
            let (x, y) = shape.geometry.center();
            assert!((x - corner.x).abs() <= 0.15 * base.cell.x + 1e-9);
            assert!((y - corner.y).abs() <= 0.15 * base.cell.y + 1e-9);
        }
    }

    #[test]
    fn ids_continue_across_calls_on_one_generator() {
        let mut gen = generator();
        let req = request(ThemeId::Sea, Style::Mandala, Difficulty::Toddler, 9);
        let first = gen.generate(&req).unwrap();
        let second = gen.generate(&req).unwrap();
        let last_first = first.shapes.last().map(|s| s.id.0).unwrap_or(0);
        assert_eq!(second.shapes[0].id.0, last_first + 1);
        // Same seed, same geometry.
        let geometry = |r: &GenerationResult| -> Vec<ShapeGeometry> {
            r.shapes.iter().map(|s| s.geometry.clone()).collect()
        };
        assert_eq!(geometry(&first), geometry(&second));
    }

    #[test]
    fn events_trace_the_run() {
        let req = request(ThemeId::Fantasy, Style::Mosaic, Difficulty::Toddler, 11);
        let mut sink = VecSink::new();
        let result = generator().generate_with_events(&req, &mut sink).unwrap();
        let events = sink.into_inner();

        assert!(matches!(
            events.first(),
            Some(GenerationEvent::GenerationStarted { pass_count: 2, .. })
        ));
        assert!(matches!(
            events.last(),
            Some(GenerationEvent::GenerationFinished { shape_count, .. })
                if *shape_count == result.shapes.len()
        ));

        let started: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::PassStarted { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![0, 1]);

        let placed = events
            .iter()
            .filter(|e| e.kind() == GenerationEventKind::ShapePlaced)
            .count();
        assert_eq!(placed, result.shapes.len());
    }

    #[test]
    fn degenerate_palettes_and_plans_warn_and_yield_nothing() {
        let dead = vec![ShapeArchetype::new(
            ShapeKind::Circle,
            ValueRange::new(0.1, 0.2),
            0.0,
        )];
        let plan =
            CompositionPlan::new().with_pass(Pass::new_with("m", MandalaLayout::new(3, 4.0)));
        let mut sink = VecSink::only([GenerationEventKind::Warning]);
        let mut rng = ParkMiller::new(1);
        assert!(run_plan(&plan, &dead, 1, &mut rng, &mut sink).is_empty());
        assert_eq!(sink.len(), 1);

        let mut sink = VecSink::only([GenerationEventKind::Warning]);
        let empty = CompositionPlan::new();
        let palette = theme(ThemeId::Sea).archetypes;
        assert!(run_plan(&empty, palette, 1, &mut rng, &mut sink).is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn invalid_rules_are_rejected_before_generation() {
        let req = request(ThemeId::Sea, Style::Scene, Difficulty::Kid, 1)
            .with_composition_rules(CompositionRules::new().with_focal_point([1.5, 0.5]));
        let mut sink = VecSink::new();
        let err = generator().generate_with_events(&req, &mut sink);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
        assert!(sink.is_empty());
    }
}
