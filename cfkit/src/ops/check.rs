//! Check operation - derive the configuration without writing files.

use std::path::Path;

use cfkit_codegen::{Artifact, Pipeline, Result, TARGET};
use cfkit_project::InputContext;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the configure and normalize stages and lists the files a
/// `generate` run would write.
pub fn check(input: &InputContext, project_path: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let config = pipeline.configure(input)?;

    let gated = !input.options.is_target_enabled(TARGET);
    let artifacts = if gated {
        Vec::new()
    } else {
        pipeline
            .artifacts()
            .iter()
            .filter(|artifact| **artifact != Artifact::Ignore || config.ignore.is_some())
            .map(|artifact| artifact.destination().to_string())
            .collect()
    };

    Ok(CheckReport {
        project_path: project_path.to_path_buf(),
        build_type: config.platform.is_java().then_some(input.options.build_type),
        config,
        gated,
        artifacts,
    })
}
