//! Platform configurator.
//!
//! Derives the deployment records from the input context: a base step shared
//! by every platform, then the rules of the declared platform. Java and
//! Spring first go through a shared overlay (see [`java`]).

mod java;
mod liberty;
mod node;
mod python;
mod spring;
mod swift;

use cfkit_core::Platform;
use cfkit_ir::{DeploymentConfig, IgnoreList, ManifestConfig, PipelineConfig, ToolchainConfig};
use cfkit_project::InputContext;

use crate::{Error, Result};

/// Derive the deployment records for a project.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] when `backendPlatform` is absent or
/// not one of NODE, SWIFT, JAVA, SPRING or PYTHON, and [`Error::MissingName`]
/// or [`Error::MissingVersion`] when a Java or Spring project lacks what its
/// artifact path is built from.
pub fn configure(input: &InputContext) -> Result<DeploymentConfig> {
    let platform = resolve_platform(input.project.backend_platform.as_deref())?;
    let mut config = base(platform, input);
    tracing::debug!(%platform, name = ?config.manifest.name, "derived base configuration");

    match platform {
        Platform::Node => node::apply(&mut config),
        Platform::Swift => swift::apply(&mut config),
        Platform::Python => python::apply(&mut config),
        Platform::Java => {
            let name = java::apply(&mut config, &input.options)?;
            liberty::apply(&mut config, &name, &input.project, &input.options);
        }
        Platform::Spring => {
            let name = java::apply(&mut config, &input.options)?;
            spring::apply(&mut config, &name, &input.options)?;
        }
    }
    tracing::debug!(
        %platform,
        buildpack = %config.manifest.buildpack,
        env = config.manifest.env_len(),
        "applied platform rules"
    );

    if let Some(server) = &input.project.server {
        config.ignore.extend(server.ignore_paths.iter().cloned());
    }
    config.toolchain.name = config.manifest.name.clone();

    Ok(config)
}

fn resolve_platform(value: Option<&str>) -> Result<Platform> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| Error::unsupported_platform(value))
}

/// Records every platform starts from.
fn base(platform: Platform, input: &InputContext) -> DeploymentConfig {
    let mut manifest = ManifestConfig::new();
    manifest.name = input.declared_name().map(str::to_string);

    if let Some(server) = &input.project.server {
        manifest.memory = server.memory.clone();
        manifest.instances = server.instances;
        manifest.disk_quota = server.disk_quota.clone();
        manifest.domain = server.domain.clone();
        manifest.host = server.host.clone();
        manifest.timeout = server.timeout;
        manifest.env = Some(server.env.clone());
    }

    DeploymentConfig {
        platform,
        manifest,
        ignore: IgnoreList::new(),
        toolchain: ToolchainConfig {
            name: None,
            repo_type: input.options.repo_type,
        },
        pipeline: PipelineConfig::new(input.project.services.clone()),
    }
}
