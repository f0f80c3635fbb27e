use coloring_compose::prelude::*;
use coloring_compose_examples::{init_tracing, summarize};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Tight spacing on a crowded adult scene makes forced placements likely.
    let rules = default_rules(Style::Scene)
        .with_density(Density::Sparse)
        .with_min_spacing(0.08);
    let request = GenerationRequest::new(ThemeId::Fantasy, Style::Scene, Difficulty::Adult)
        .with_composition_rules(rules)
        .with_seed(2024);

    let mut forced = 0usize;
    let mut sink = FnSink::new(|event| match event {
        GenerationEvent::PassFinished {
            id, placed, stats, ..
        } => info!(
            "Pass '{id}': {placed} placed, {} attempts, {} skipped.",
            stats.attempts, stats.skipped
        ),
        GenerationEvent::PlacementForced { kind, center, .. } => {
            forced += 1;
            warn!("Forced {} at ({:.3}, {:.3}).", kind.as_str(), center.x, center.y);
        }
        _ => {}
    });

    let mut generator = Generator::new();
    let result = generator.generate_with_events(&request, &mut sink)?;
    drop(sink);

    info!("{} | forced: {forced}", summarize(&result));
    Ok(())
}
