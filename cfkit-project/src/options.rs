//! Generation options supplied alongside the project descriptor.

use cfkit_core::{BuildType, RepoType};
use serde::Deserialize;

/// Options that steer artifact generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Overrides the application name for Java and Spring projects
    pub app_name: Option<String>,

    /// Scaffolder create type, e.g. `bff/liberty` or `enable/spring`
    pub create_type: Option<String>,

    /// Build tool for Java and Spring projects
    #[serde(default)]
    pub build_type: BuildType,

    /// Application version, used in Spring jar names
    pub version: Option<String>,

    /// How the toolchain obtains the repository
    #[serde(default)]
    pub repo_type: RepoType,

    /// Output targets to enable. `None` enables every target; an empty list
    /// enables none.
    pub platforms: Option<Vec<String>>,
}

impl Options {
    /// Whether output for the given target identifier should be written.
    pub fn is_target_enabled(&self, target: &str) -> bool {
        match &self.platforms {
            None => true,
            Some(platforms) => platforms.iter().any(|p| p == target),
        }
    }

    /// The app name override, ignoring empty values.
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref().filter(|n| !n.is_empty())
    }

    /// The create type, ignoring empty values.
    pub fn create_type(&self) -> Option<&str> {
        self.create_type.as_deref().filter(|t| !t.is_empty())
    }

    /// The version, ignoring empty values.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}
