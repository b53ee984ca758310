//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::render::PageContext;

/// Stage that wraps the HTML fragment in the page template.
///
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let page_context = PageContext {
            page: ctx.page.clone(),
            content: std::mem::take(&mut doc.content),
            highlight_css: ctx.highlight_css.clone(),
        };

        let html = ctx.renderer.render_page(&page_context)?;
        doc.output_html = Some(html);

        Ok(())
    }
}
