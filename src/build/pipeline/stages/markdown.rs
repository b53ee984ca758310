//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that renders markdown to an HTML fragment.
///
/// Code blocks are highlighted when the `codehilite` extension is enabled.
/// After this stage, `doc.content` contains HTML.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.content = render_markdown(&doc.content, ctx.highlighter, ctx.markdown_config)?;

        log::debug!("rendered {} bytes of HTML", doc.content.len());
        Ok(())
    }
}
