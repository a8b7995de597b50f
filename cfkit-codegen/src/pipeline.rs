//! Generation pipeline orchestrator.

use std::path::PathBuf;

use cfkit_core::FileService;
use cfkit_project::InputContext;
use serde::Serialize;

use crate::{Artifact, MiniJinjaRenderer, NormalizedConfig, Result, TemplateRenderer, configure, render};

/// Output target identifier checked against the `platforms` allow-list.
pub const TARGET: &str = "bluemix";

/// Outcome of a generation pass.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// The records the files were rendered from.
    pub config: NormalizedConfig,
    /// Paths written, relative to the file service root.
    pub written: Vec<PathBuf>,
    /// Whether rendering was switched off by the `platforms` allow-list.
    pub gated: bool,
}

/// The generation pipeline: configure → normalize → gate → render.
///
/// # Example
///
/// ```ignore
/// let report = Pipeline::new().run(&input, &mut DiskFileService::new("."))?;
/// for path in &report.written {
///     println!("wrote {}", path.display());
/// }
/// ```
pub struct Pipeline {
    artifacts: Vec<Artifact>,
    renderer: Box<dyn TemplateRenderer>,
}

impl Pipeline {
    /// Create a pipeline that writes every artifact with minijinja.
    pub fn new() -> Self {
        Self {
            artifacts: Artifact::ALL.to_vec(),
            renderer: Box::new(MiniJinjaRenderer),
        }
    }

    /// Restrict the artifacts to write, in the given order.
    pub fn with_artifacts(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.artifacts = artifacts.into_iter().collect();
        self
    }

    /// Use a different template renderer.
    pub fn renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Artifacts this pipeline writes.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Derive and normalize the records without rendering anything.
    pub fn configure(&self, input: &InputContext) -> Result<NormalizedConfig> {
        let config = configure(input)?;
        Ok(NormalizedConfig::from(config))
    }

    /// Run every stage, writing the artifacts through `fs`.
    ///
    /// When the `platforms` option is present and does not name
    /// [`TARGET`], the records are still derived but nothing is written.
    ///
    /// # Errors
    ///
    /// Configuration errors are raised before any file is written; a
    /// template or write failure aborts the remaining artifacts.
    pub fn run(&self, input: &InputContext, fs: &mut dyn FileService) -> Result<GenerateReport> {
        let config = self.configure(input)?;

        if !input.options.is_target_enabled(TARGET) {
            tracing::info!(
                platforms = ?input.options.platforms,
                "'{TARGET}' is not an enabled platform, nothing to write"
            );
            return Ok(GenerateReport {
                config,
                written: Vec::new(),
                gated: true,
            });
        }

        let written = render(&config, &self.artifacts, self.renderer.as_ref(), fs)?;
        Ok(GenerateReport {
            config,
            written,
            gated: false,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
