use coloring_compose::prelude::*;
use coloring_compose_examples::{init_tracing, render_result_to_png, summarize, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same theme and seed; the kaleidoscope adds a rotated inner overlay.
    for (style, out) in [
        (Style::Mandala, "mandala-vs-kaleidoscope-mandala.png"),
        (Style::Kaleidoscope, "mandala-vs-kaleidoscope-kaleidoscope.png"),
    ] {
        let request = GenerationRequest::new(ThemeId::Space, style, Difficulty::Teen).with_seed(7);
        let result = generate(&request)?;
        info!("{}", summarize(&result));
        render_result_to_png(&result, &RenderConfig::new(1000), out)?;
    }

    Ok(())
}
