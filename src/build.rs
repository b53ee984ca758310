mod highlight;
mod markdown;
pub mod pipeline;
mod render;

pub use highlight::SyntaxHighlighter;
pub use pipeline::{Pipeline, PipelineContext, ProcessingDocument};
pub use render::{PageInfo, Renderer};
