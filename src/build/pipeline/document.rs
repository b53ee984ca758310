//! Document type for pipeline processing.

use std::path::{Path, PathBuf};

/// The document being processed through the pipeline.
///
/// Its state evolves through the stages:
///
/// 1. Initially: `content` is empty
/// 2. After load: `content` = raw markdown
/// 3. After markdown: `content` = HTML fragment
/// 4. After template: `output_html` = complete page
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The markdown file to read
    pub source_path: PathBuf,

    /// Where the finished page is written
    pub output_path: PathBuf,

    /// Content being processed.
    pub content: String,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(source_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            content: String::new(),
            output_html: None,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
