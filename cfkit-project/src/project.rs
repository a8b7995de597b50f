//! Project descriptor types and parsing.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, error::SourceContext};

/// The project descriptor produced by the scaffolder.
///
/// `backendPlatform` is kept as written so that an unsupported value can be
/// reported by name when the configuration is derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Declared backend platform tag (NODE, SWIFT, JAVA, SPRING or PYTHON)
    pub backend_platform: Option<String>,

    /// Application name, used when no server declaration is present
    pub name: Option<String>,

    /// Server declaration carrying the name and manifest overrides
    pub server: Option<Server>,

    /// Services payload, passed through to the pipeline unchanged
    pub services: Option<Value>,

    /// Cloudant service request
    pub cloudant: Option<Value>,

    /// Object Storage service request
    pub object_storage: Option<Value>,
}

/// Server declaration. Every field overrides the generated manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    pub name: Option<String>,
    pub memory: Option<String>,
    pub instances: Option<u32>,
    pub disk_quota: Option<String>,
    pub domain: Option<String>,
    pub host: Option<String>,
    pub timeout: Option<u32>,

    /// Environment the platform's own entries are added to
    #[serde(default)]
    pub env: IndexMap<String, String>,

    /// Extra entries appended to the ignore file
    #[serde(default, rename = "ignorePaths")]
    pub ignore_paths: Vec<String>,
}

impl Project {
    /// Whether a Cloudant service was requested.
    pub fn has_cloudant(&self) -> bool {
        self.cloudant.as_ref().is_some_and(is_truthy)
    }

    /// Whether an Object Storage service was requested.
    pub fn has_object_storage(&self) -> bool {
        self.object_storage.as_ref().is_some_and(is_truthy)
    }
}

/// Presence check for service flags.
///
/// Scaffolders send these as booleans, service arrays or service objects, so
/// an empty array still counts as a request while `null`, `false`, `0` and
/// `""` do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Descriptor file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

impl FromStr for Project {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_project(s, "project.json", Format::Json)
    }
}

impl Project {
    /// Parse a project descriptor file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), "loading project descriptor");
        parse_project(
            &content,
            &path.display().to_string(),
            Format::from_path(path),
        )
    }

    /// Parse a JSON descriptor with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        parse_project(content, filename, Format::Json)
    }

    /// Parse a TOML descriptor with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        parse_project(content, filename, Format::Toml)
    }
}

/// Parse a project descriptor from content in the given format.
pub fn parse_project(content: &str, filename: &str, format: Format) -> Result<Project> {
    let source_ctx = SourceContext::new(content, filename);
    let project: Project = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
    };
    validate_project(&project, &source_ctx)?;
    Ok(project)
}

/// Validate the server overrides after parsing.
fn validate_project(project: &Project, ctx: &SourceContext) -> Result<()> {
    let Some(server) = &project.server else {
        return Ok(());
    };

    for (field, value) in [("memory", &server.memory), ("disk_quota", &server.disk_quota)] {
        if let Some(value) = value
            && !is_quantity(value)
        {
            return Err(ctx.validation_error(
                format!("invalid {field} '{value}', expected a size such as 256M or 1G"),
                Some(value.as_str()),
            ));
        }
    }

    if server.instances == Some(0) {
        return Err(ctx.validation_error("instances must be at least 1", Some("instances")));
    }

    Ok(())
}

/// Cloud Foundry sizes: digits followed by M, MB, G or GB.
fn is_quantity(value: &str) -> bool {
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    !digits.is_empty() && matches!(unit.to_ascii_uppercase().as_str(), "M" | "MB" | "G" | "GB")
}
