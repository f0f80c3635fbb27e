use coloring_compose::prelude::*;
use coloring_compose_examples::{init_tracing, render_result_to_png, summarize, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A focal-point scene: depth layers pull the foreground toward (0.5, 0.55).
    let request = GenerationRequest::new(ThemeId::Sea, Style::Scene, Difficulty::Kid).with_seed(42);
    let result = generate(&request)?;
    info!("{}", summarize(&result));

    render_result_to_png(
        &result,
        &RenderConfig::new(1000).with_background([235, 245, 255]),
        "scene-basic.png",
    )?;
    Ok(())
}
