#![forbid(unsafe_code)]

mod output;
mod rendering;

pub use output::{read_request_json, summarize, write_result_json};
pub use rendering::{init_tracing, outline, render_result_to_png, RenderConfig};
