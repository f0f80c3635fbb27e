use coloring_compose::prelude::*;
use coloring_compose_examples::{init_tracing, render_result_to_png, summarize, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A mosaic lays a second grid over the inner corners of the first.
    for (style, out, background) in [
        (Style::Pattern, "pattern-vs-mosaic-pattern.png", [255, 246, 235]),
        (Style::Mosaic, "pattern-vs-mosaic-mosaic.png", [240, 255, 240]),
    ] {
        let request = GenerationRequest::new(ThemeId::Garden, style, Difficulty::Kid).with_seed(7);
        let result = generate(&request)?;
        info!("{}", summarize(&result));
        render_result_to_png(
            &result,
            &RenderConfig::new(1000).with_background(background),
            out,
        )?;
    }

    Ok(())
}
