//! Overlay shared by Liberty and Spring projects.
//!
//! Runs before the platform rules so the artifact paths see the overridden
//! name.

use cfkit_core::{BuildType, RepoType};
use cfkit_ir::DeploymentConfig;
use cfkit_project::Options;

use crate::{Error, Result};

/// Apply the overlay and return the application name the platform rules
/// build their artifact paths from.
pub(super) fn apply(config: &mut DeploymentConfig, options: &Options) -> Result<String> {
    if let Some(app_name) = options.app_name() {
        config.manifest.name = Some(app_name.to_string());
    }
    let name = config
        .manifest
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or(Error::MissingName {
            platform: config.platform,
        })?;

    match options.create_type() {
        Some("bff/liberty") => config
            .manifest
            .set_env("OPENAPI_SPEC", format!("/{name}/swagger/api")),
        Some("bff/spring") => config.manifest.set_env("OPENAPI_SPEC", "/swagger-ui.html"),
        _ => {}
    }
    if options.create_type().is_some_and(|t| t.starts_with("enable/")) {
        config.toolchain.repo_type = RepoType::Link;
    }

    let pipeline = &mut config.pipeline;
    pipeline.triggers_type = Some("commit".to_string());
    pipeline.build_job.build_type = Some("shell".to_string());
    pipeline.build_job.script = Some(build_script(options.build_type));

    tracing::debug!(%name, build_type = %options.build_type, "applied java overlay");
    Ok(name)
}

/// Build script as a YAML block scalar, indented for the pipeline job.
fn build_script(build_type: BuildType) -> String {
    let command = match build_type {
        BuildType::Maven => "mvn install",
        BuildType::Gradle => "gradle build",
    };
    format!("|\n      #!/bin/bash\n      export JAVA_HOME=$JAVA8_HOME\n      {command}")
}

/// Push command for a packaged artifact, relative to the project root.
pub(super) fn push_command(artifact: &str) -> String {
    format!("cf push \"${{CF_APP}}\" -p {artifact}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::{configure, tests::input};
    use super::*;

    #[test]
    fn test_build_script() {
        assert_eq!(
            build_script(BuildType::Maven),
            "|\n      #!/bin/bash\n      export JAVA_HOME=$JAVA8_HOME\n      mvn install"
        );
        assert!(build_script(BuildType::Gradle).ends_with("      gradle build"));
    }

    #[test]
    fn test_push_command() {
        assert_eq!(
            push_command("target/acme.zip"),
            "cf push \"${CF_APP}\" -p target/acme.zip"
        );
    }

    #[test]
    fn test_app_name_overrides_declared_name() {
        let config = configure(&input(
            json!({"backendPlatform": "JAVA", "name": "acme"}),
            json!({"appName": "acme-api"}),
        ))
        .unwrap();

        assert_eq!(config.manifest.name.as_deref(), Some("acme-api"));
        assert_eq!(config.toolchain.name.as_deref(), Some("acme-api"));
        assert_eq!(config.manifest.path.as_deref(), Some("./target/acme-api.zip"));
    }

    #[test]
    fn test_empty_app_name_is_ignored() {
        let config = configure(&input(
            json!({"backendPlatform": "JAVA", "name": "acme"}),
            json!({"appName": ""}),
        ))
        .unwrap();
        assert_eq!(config.manifest.name.as_deref(), Some("acme"));
    }

    #[test]
    fn test_bff_create_types_set_openapi_spec() {
        let liberty = configure(&input(
            json!({"backendPlatform": "JAVA", "name": "acme"}),
            json!({"createType": "bff/liberty"}),
        ))
        .unwrap();
        assert_eq!(
            liberty.manifest.env_var("OPENAPI_SPEC"),
            Some("/acme/swagger/api")
        );

        let spring = configure(&input(
            json!({"backendPlatform": "SPRING", "name": "acme"}),
            json!({"createType": "bff/spring", "version": "1.0"}),
        ))
        .unwrap();
        assert_eq!(
            spring.manifest.env_var("OPENAPI_SPEC"),
            Some("/swagger-ui.html")
        );
    }

    #[test]
    fn test_enable_create_type_links_repository() {
        let config = configure(&input(
            json!({"backendPlatform": "SPRING", "name": "acme"}),
            json!({"createType": "enable/spring", "version": "1.0"}),
        ))
        .unwrap();
        assert_eq!(config.toolchain.repo_type, RepoType::Link);
        assert_eq!(config.manifest.env_var("OPENAPI_SPEC"), None);
    }

    #[test]
    fn test_pipeline_build_job() {
        let config = configure(&input(
            json!({"backendPlatform": "JAVA", "name": "acme"}),
            json!({"buildType": "gradle"}),
        ))
        .unwrap();

        let pipeline = &config.pipeline;
        assert_eq!(pipeline.triggers_type.as_deref(), Some("commit"));
        assert_eq!(pipeline.build_job.build_type.as_deref(), Some("shell"));
        assert!(pipeline.build_job.script.as_deref().unwrap().ends_with("gradle build"));
        assert_eq!(pipeline.build_job.artifact_dir, "''");
    }

    #[test]
    fn test_missing_name() {
        for platform in ["JAVA", "SPRING"] {
            let err = configure(&input(
                json!({"backendPlatform": platform}),
                json!({"version": "1.0"}),
            ))
            .unwrap_err();
            assert!(matches!(err, Error::MissingName { .. }), "{platform}");
        }
    }

    #[test]
    fn test_app_name_supplies_missing_name() {
        let config = configure(&input(
            json!({"backendPlatform": "JAVA"}),
            json!({"appName": "acme"}),
        ))
        .unwrap();
        assert_eq!(config.manifest.name.as_deref(), Some("acme"));
    }
}
