//! Application manifest record.

use indexmap::IndexMap;
use serde::Serialize;

/// Cloud Foundry application manifest, before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ManifestConfig {
    /// Application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Buildpack that builds and runs the application.
    pub buildpack: String,
    /// Start command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Memory limit, e.g. `256M`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    /// Path of the artifact to push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Environment variables, in insertion order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_quota: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl ManifestConfig {
    /// Create a manifest with an empty environment.
    pub fn new() -> Self {
        Self {
            env: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    /// Set an environment variable, replacing any previous value.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
    }

    /// Look up an environment variable.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.as_ref()?.get(key).map(String::as_str)
    }

    /// Number of environment variables.
    pub fn env_len(&self) -> usize {
        self.env.as_ref().map_or(0, IndexMap::len)
    }

    /// Apply a default memory limit unless one was declared.
    pub fn default_memory(&mut self, memory: &str) {
        self.memory.get_or_insert_with(|| memory.to_string());
    }
}
