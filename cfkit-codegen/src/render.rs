//! Artifact renderer.

use std::{fmt, path::PathBuf};

use cfkit_core::FileService;
use cfkit_ir::{ManifestConfig, PipelineConfig, ToolchainConfig};
use serde_json::{Value, json};

use crate::{Error, NormalizedConfig, Result, TemplateRenderer};

const MANIFEST_TEMPLATE: &str = include_str!("templates/manifest.yml");
const TOOLCHAIN_TEMPLATE: &str = include_str!("templates/toolchain.yml");
const PIPELINE_TEMPLATE: &str = include_str!("templates/pipeline.yml");
const DEPLOY_FORM: &str = include_str!("templates/deploy.json");

/// Manifest values the platform falls back to when the project declares
/// none.
const DEFAULT_INSTANCES: u32 = 1;
const DEFAULT_TIMEOUT: u32 = 180;
const DEFAULT_DISK_QUOTA: &str = "1024M";
const DEFAULT_DOMAIN: &str = "mybluemix.net";

/// A file produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Application manifest
    Manifest,
    /// Upload ignore file
    Ignore,
    /// Toolchain descriptor
    Toolchain,
    /// Deploy form schema
    Deploy,
    /// Delivery pipeline descriptor
    Pipeline,
}

impl Artifact {
    /// Every artifact, in the order they are written.
    pub const ALL: [Artifact; 5] = [
        Artifact::Manifest,
        Artifact::Ignore,
        Artifact::Toolchain,
        Artifact::Deploy,
        Artifact::Pipeline,
    ];

    /// Destination path, relative to the output root.
    pub fn destination(&self) -> &'static str {
        match self {
            Artifact::Manifest => "manifest.yml",
            Artifact::Ignore => ".cfignore",
            Artifact::Toolchain => ".bluemix/toolchain.yml",
            Artifact::Deploy => ".bluemix/deploy.json",
            Artifact::Pipeline => ".bluemix/pipeline.yml",
        }
    }

    /// Produce the file content, or `None` when the artifact has nothing to
    /// write.
    fn content(&self, config: &NormalizedConfig, renderer: &dyn TemplateRenderer) -> Result<Option<String>> {
        let rendered = match self {
            Artifact::Manifest => renderer.render(
                "manifest.yml",
                MANIFEST_TEMPLATE,
                &manifest_context(&config.manifest),
            )?,
            Artifact::Ignore => return Ok(config.ignore.clone()),
            Artifact::Toolchain => renderer.render(
                "toolchain.yml",
                TOOLCHAIN_TEMPLATE,
                &toolchain_context(&config.toolchain),
            )?,
            Artifact::Deploy => DEPLOY_FORM.to_string(),
            Artifact::Pipeline => renderer.render(
                "pipeline.yml",
                PIPELINE_TEMPLATE,
                &pipeline_context(&config.pipeline),
            )?,
        };
        Ok(Some(rendered))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.destination())
    }
}

/// Render `artifacts` in order and write them through `fs`.
///
/// Returns the paths written. The first failure aborts the remaining
/// artifacts; files already written are left in place.
pub fn render(
    config: &NormalizedConfig,
    artifacts: &[Artifact],
    renderer: &dyn TemplateRenderer,
    fs: &mut dyn FileService,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let Some(content) = artifact.content(config, renderer)? else {
            tracing::debug!(%artifact, "nothing to write, skipping");
            continue;
        };

        let path = PathBuf::from(artifact.destination());
        fs.write(&path, &content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote artifact");
        written.push(path);
    }

    Ok(written)
}

// Every template variable is always present in its context (as `null` when
// unset) so strict-undefined rendering only trips on template typos.

fn manifest_context(manifest: &ManifestConfig) -> Value {
    // Pairs rather than a map so the template sees insertion order.
    let env = manifest
        .env
        .as_ref()
        .map(|env| env.iter().map(|(k, v)| [k, v]).collect::<Vec<_>>());

    json!({
        "name": manifest.name,
        "buildpack": manifest.buildpack,
        "command": manifest.command,
        "path": manifest.path,
        "memory": manifest.memory,
        "env": env,
        "instances": manifest.instances.unwrap_or(DEFAULT_INSTANCES),
        "timeout": manifest.timeout.unwrap_or(DEFAULT_TIMEOUT),
        "disk_quota": manifest.disk_quota.as_deref().unwrap_or(DEFAULT_DISK_QUOTA),
        "domain": manifest.domain.as_deref().unwrap_or(DEFAULT_DOMAIN),
        "host": manifest.host,
    })
}

fn toolchain_context(toolchain: &ToolchainConfig) -> Value {
    json!({
        "name": toolchain.name.as_deref().unwrap_or_default(),
        "repo_type": toolchain.repo_type,
    })
}

fn pipeline_context(pipeline: &PipelineConfig) -> Value {
    json!({
        "build_job": {
            "build_type": pipeline.build_job.build_type,
            "script": pipeline.build_job.script,
            "artifact_dir": pipeline.build_job.artifact_dir,
        },
        "services": service_names(pipeline.services.as_ref()),
        "triggers_type": pipeline.triggers_type,
        "push_command": pipeline.push_command,
    })
}

/// Names of the services the deploy job binds.
///
/// The payload is passed through from the descriptor as written: an array
/// lists service names, an object is keyed by them and a lone string or
/// number names a single service.
fn service_names(services: Option<&Value>) -> Vec<String> {
    match services {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_name).collect(),
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(value) => scalar_name(value).into_iter().collect(),
        None => Vec::new(),
    }
}

fn scalar_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
