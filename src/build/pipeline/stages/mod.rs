//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **LoadStage** - Read the markdown source into memory
//! 2. **MarkdownStage** - Convert markdown to an HTML fragment
//! 3. **TemplateStage** - Wrap the fragment in the page template
//! 4. **WriteStage** - Write the finished page to disk

mod load;
mod markdown;
mod template;
mod write;

pub use load::LoadStage;
pub use markdown::MarkdownStage;
pub use template::TemplateStage;
pub use write::WriteStage;
