use cfkit_core::BuildType;
use cfkit_ir::DeploymentConfig;
use cfkit_project::Options;

use super::java::push_command;
use crate::{Error, Result};

const IGNORE: [&str; 6] = [
    "/.classpath",
    "/.project",
    "/.settings",
    "/src/main/resources/application-local.properties",
    "target/",
    "build/",
];

pub(super) fn apply(config: &mut DeploymentConfig, name: &str, options: &Options) -> Result<()> {
    let version = options.version().ok_or(Error::MissingVersion)?;
    config.ignore = IGNORE.into_iter().collect();

    let manifest = &mut config.manifest;
    manifest.buildpack = "java_buildpack".to_string();
    manifest.default_memory("256M");

    let artifact = match options.build_type {
        BuildType::Maven => format!("target/{name}-{version}.jar"),
        BuildType::Gradle => format!("build/libs/{name}-{version}.jar"),
    };
    manifest.path = Some(format!("./{artifact}"));
    config.pipeline.push_command = Some(push_command(&artifact));

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::{configure, tests::input};
    use crate::Error;

    #[test]
    fn test_gradle_jar() {
        let config = configure(&input(
            json!({"backendPlatform": "SPRING", "name": "Acme"}),
            json!({"buildType": "gradle", "version": "1.0"}),
        ))
        .unwrap();

        assert_eq!(
            config.manifest.path.as_deref(),
            Some("./build/libs/Acme-1.0.jar")
        );
        assert_eq!(
            config.pipeline.push_command.as_deref(),
            Some("cf push \"${CF_APP}\" -p build/libs/Acme-1.0.jar")
        );
    }

    #[test]
    fn test_maven_jar_is_the_default() {
        for options in [
            json!({"version": "1.0"}),
            json!({"version": "1.0", "buildType": "maven"}),
        ] {
            let config = configure(&input(
                json!({"backendPlatform": "SPRING", "name": "Acme"}),
                options,
            ))
            .unwrap();
            assert_eq!(config.manifest.path.as_deref(), Some("./target/Acme-1.0.jar"));
            assert_eq!(config.manifest.memory.as_deref(), Some("256M"));
        }
    }

    #[test]
    fn test_spring_ignore_entries() {
        let config = configure(&input(
            json!({"backendPlatform": "SPRING", "name": "Acme"}),
            json!({"version": "1.0"}),
        ))
        .unwrap();
        assert_eq!(
            config.ignore.entries()[3],
            "/src/main/resources/application-local.properties"
        );
    }

    #[test]
    fn test_missing_version() {
        for options in [json!({}), json!({"version": ""})] {
            let err = configure(&input(
                json!({"backendPlatform": "SPRING", "name": "Acme"}),
                options,
            ))
            .unwrap_err();
            assert!(matches!(err, Error::MissingVersion));
        }
    }
}
