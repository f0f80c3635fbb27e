use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use coloring_compose::prelude::*;

/// Writes `result` as pretty-printed JSON.
pub fn write_result_json(result: &GenerationResult, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Reads a [`GenerationRequest`] from a JSON file and validates it.
pub fn read_request_json(path: impl AsRef<Path>) -> anyhow::Result<GenerationRequest> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let request: GenerationRequest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    request.validate()?;
    Ok(request)
}

/// One-line description of a result, e.g. `sea/scene/kid seed=42: 7 shapes (4 circle, 3 star)`.
pub fn summarize(result: &GenerationResult) -> String {
    let m = &result.metadata;
    let mut counts: Vec<(ShapeKind, usize)> = Vec::new();
    for shape in &result.shapes {
        match counts.iter_mut().find(|(k, _)| *k == shape.kind()) {
            Some((_, n)) => *n += 1,
            None => counts.push((shape.kind(), 1)),
        }
    }
    let breakdown = counts
        .iter()
        .map(|(k, n)| format!("{n} {}", k.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}/{}/{} seed={}: {} shapes ({breakdown})",
        m.resolved_theme, m.style, m.difficulty, m.seed, m.shape_count
    )
}
