use coloring_compose::prelude::*;
use coloring_compose_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Shape counts per style and tier for a fixed seed.
    for style in Style::ALL {
        let counts = Difficulty::ALL
            .iter()
            .map(|&difficulty| {
                let request =
                    GenerationRequest::new(ThemeId::Sea, style, difficulty).with_seed(99);
                generate(&request).map(|r| format!("{difficulty}={}", r.shapes.len()))
            })
            .collect::<Result<Vec<_>>>()?;
        info!("{:<12} {}", style.as_str(), counts.join("  "));
    }

    Ok(())
}
