//! Config normalizer.

use cfkit_core::Platform;
use cfkit_ir::{DeploymentConfig, IgnoreList, ManifestConfig, PipelineConfig, ToolchainConfig};
use serde::Serialize;

/// Records in their final form, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedConfig {
    pub platform: Platform,
    pub manifest: ManifestConfig,
    /// Ignore file content, one entry per line. `None` skips the file.
    pub ignore: Option<String>,
    pub toolchain: ToolchainConfig,
    pub pipeline: PipelineConfig,
}

impl From<DeploymentConfig> for NormalizedConfig {
    fn from(config: DeploymentConfig) -> Self {
        let (manifest, ignore) = normalize(config.manifest, config.ignore);
        Self {
            platform: config.platform,
            manifest,
            ignore,
            toolchain: config.toolchain,
            pipeline: config.pipeline,
        }
    }
}

/// Drop an empty environment and flatten the ignore list into file text.
pub fn normalize(mut manifest: ManifestConfig, ignore: IgnoreList) -> (ManifestConfig, Option<String>) {
    if manifest.env.as_ref().is_some_and(|env| env.is_empty()) {
        manifest.env = None;
    }
    let ignore = (!ignore.is_empty()).then(|| ignore.entries().join("\n"));
    (manifest, ignore)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env_is_removed() {
        let (manifest, _) = normalize(ManifestConfig::new(), IgnoreList::new());
        assert_eq!(manifest.env, None);
    }

    #[test]
    fn test_populated_env_is_kept() {
        let mut manifest = ManifestConfig::new();
        manifest.set_env("FLASK_APP", "server");

        let (manifest, _) = normalize(manifest, IgnoreList::new());
        assert_eq!(manifest.env_var("FLASK_APP"), Some("server"));
    }

    #[test]
    fn test_ignore_list_joined_by_newlines() {
        let ignore: IgnoreList = [".build/*", "Packages/*"].into_iter().collect();
        let (_, text) = normalize(ManifestConfig::new(), ignore);
        assert_eq!(text.as_deref(), Some(".build/*\nPackages/*"));
    }

    #[test]
    fn test_empty_ignore_list_yields_nothing() {
        let (_, text) = normalize(ManifestConfig::new(), IgnoreList::new());
        assert_eq!(text, None);
    }
}
