//! Check command report data structures.

use std::path::PathBuf;

use cfkit_codegen::{NormalizedConfig, TARGET};
use cfkit_core::BuildType;

use super::output::{Output, Report};

/// Report data from deriving the configuration.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the project descriptor.
    pub project_path: PathBuf,
    /// The derived records.
    pub config: NormalizedConfig,
    /// Build tool, for platforms that build a JVM artifact.
    pub build_type: Option<BuildType>,
    /// Whether the `platforms` option switches rendering off.
    pub gated: bool,
    /// Files a generate run would write.
    pub artifacts: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let manifest = &self.config.manifest;

        out.preformatted(&format!("✓ {} is valid", self.project_path.display()));
        out.newline();

        out.key_value("platform", self.config.platform.as_str());
        out.key_value("name", manifest.name.as_deref().unwrap_or("(unnamed)"));
        out.key_value("buildpack", &manifest.buildpack);
        if let Some(memory) = &manifest.memory {
            out.key_value("memory", memory);
        }
        if let Some(command) = &manifest.command {
            out.key_value("command", command);
        }
        if let Some(path) = &manifest.path {
            out.key_value("path", path);
        }
        if let Some(build_type) = self.build_type {
            out.key_value("build", build_type.as_str());
        }
        out.key_value("repo", self.config.toolchain.repo_type.as_str());

        if let Some(env) = &manifest.env {
            out.newline();
            out.section(&format!("  env ({})", env.len()));
            for (key, value) in env {
                out.list_item(&format!("{key}={value}"));
            }
        }

        out.newline();
        if self.gated {
            out.preformatted(&format!(
                "Nothing would be written: '{TARGET}' is not an enabled platform"
            ));
        } else {
            out.section(&format!("  files ({})", self.artifacts.len()));
            for artifact in &self.artifacts {
                out.list_item(artifact);
            }
        }
    }
}
