//! Generation pipeline: styles expand into plans of placement passes, the runner
//! executes them and hands the merged placements to the synthesizer.
pub mod events;
pub mod overlay;
pub mod plan;
pub mod request;
pub mod runner;
pub mod style;

pub use request::{GenerationMetadata, GenerationRequest, GenerationResult};
pub use runner::{generate, Generator};
pub use style::{default_rules, Style};
