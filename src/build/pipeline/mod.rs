//! Build pipeline for document processing.
//!
//! The pipeline transforms the document through a series of stages:
//! 1. Loading (read markdown from disk)
//! 2. Markdown rendering (to an HTML fragment)
//! 3. Template rendering (page template wrapper)
//! 4. File writing (output to disk)
//!
//! The first failing stage aborts the run; later stages never execute.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{LoadStage, MarkdownStage, TemplateStage, WriteStage};

/// A stage in the document processing pipeline.
pub trait Stage {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process the document through this stage.
    ///
    /// The document is passed by mutable reference so stages can transform
    /// its content in place. The `ctx` provides access to shared resources
    /// like the renderer and highlighter.
    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The default pipeline includes: load → markdown → template → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(LoadStage);
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run the pipeline on a document.
    pub fn run(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            log::debug!("running stage '{}'", stage.name());
            stage.process(doc, ctx)?;
        }

        Ok(())
    }

    /// Get the names of all stages in order.
    #[cfg(test)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
