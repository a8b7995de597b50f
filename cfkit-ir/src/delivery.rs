//! Toolchain and pipeline records for the continuous-delivery service.

use cfkit_core::RepoType;
use serde::Serialize;
use serde_json::Value;

/// Artifact directory used by builder jobs that produce no artifact.
const DEFAULT_ARTIFACT_DIR: &str = "''";

/// Toolchain descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolchainConfig {
    /// Application name.
    pub name: Option<String>,
    /// Whether the toolchain clones or links the repository.
    pub repo_type: RepoType,
}

/// Delivery pipeline descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    /// Properties of the build job.
    pub build_job: BuildJobProps,
    /// Services payload from the project descriptor, unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Value>,
    /// Trigger type of the build stage, e.g. `commit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers_type: Option<String>,
    /// Push command for the deploy job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_command: Option<String>,
}

impl PipelineConfig {
    pub fn new(services: Option<Value>) -> Self {
        Self {
            build_job: BuildJobProps::default(),
            services,
            triggers_type: None,
            push_command: None,
        }
    }
}

/// Build job properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildJobProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    /// Build script as a YAML scalar, block indicator included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    pub artifact_dir: String,
}

impl Default for BuildJobProps {
    fn default() -> Self {
        Self {
            build_type: None,
            script: None,
            artifact_dir: DEFAULT_ARTIFACT_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_pipeline_defaults() {
        let pipeline = PipelineConfig::new(Some(json!(["cloudant"])));

        assert_eq!(pipeline.build_job.artifact_dir, "''");
        assert!(pipeline.build_job.script.is_none());
        assert!(pipeline.triggers_type.is_none());
        assert_eq!(pipeline.services, Some(json!(["cloudant"])));
    }

    #[test]
    fn test_toolchain_serializes_repo_type() {
        let toolchain = ToolchainConfig {
            name: Some("acme".to_string()),
            repo_type: RepoType::Link,
        };
        assert_eq!(
            serde_json::to_value(&toolchain).unwrap(),
            json!({"name": "acme", "repo_type": "link"})
        );
    }
}
