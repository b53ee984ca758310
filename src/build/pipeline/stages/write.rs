//! File writing stage.
//!
//! Writes the final HTML output to the filesystem.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes the rendered page to its output path.
///
/// Missing parent directories are created and an existing file is
/// overwritten.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let html = doc.output_html.as_ref().ok_or_else(|| {
            PipelineError::stage(
                "write",
                format!(
                    "'{}' has no output HTML (was template stage run?)",
                    doc.output_path().display()
                ),
            )
        })?;

        let output_path = doc.output_path();
        let write_error = |source: std::io::Error| PipelineError::Write {
            path: output_path.to_path_buf(),
            source,
        };

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        std::fs::write(output_path, html).map_err(write_error)?;

        log::debug!("wrote {}", output_path.display());
        Ok(())
    }
}
