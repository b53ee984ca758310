//! Pipeline context for sharing state across stages.

use crate::build::highlight::SyntaxHighlighter;
use crate::build::render::{PageInfo, Renderer};
use crate::config::MarkdownConfig;

/// Shared context for pipeline stages.
///
/// Contains the services and configuration stages need while processing.
pub struct PipelineContext<'a> {
    /// Title and language written into the page head
    pub page: PageInfo,

    /// Markdown processing configuration
    pub markdown_config: &'a MarkdownConfig,

    /// Highlight theme stylesheet, if a theme is configured
    pub highlight_css: Option<String>,

    /// Syntax highlighter for code blocks
    pub highlighter: &'a SyntaxHighlighter,

    /// Page template renderer
    pub renderer: &'a Renderer,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(
        page: PageInfo,
        markdown_config: &'a MarkdownConfig,
        highlight_css: Option<String>,
        highlighter: &'a SyntaxHighlighter,
        renderer: &'a Renderer,
    ) -> Self {
        Self {
            page,
            markdown_config,
            highlight_css,
            highlighter,
            renderer,
        }
    }
}
