//! Source loading stage.

use std::io::ErrorKind;

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that reads the markdown source as UTF-8 text.
///
/// After this stage, `doc.content` holds the raw markdown.
pub struct LoadStage;

impl Stage for LoadStage {
    fn name(&self) -> &'static str {
        "load"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let path = &doc.source_path;
        doc.content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PipelineError::NotFound(path.clone()),
            _ => PipelineError::Read {
                path: path.clone(),
                source,
            },
        })?;

        log::debug!("read {} bytes from {}", doc.content.len(), path.display());
        Ok(())
    }
}
