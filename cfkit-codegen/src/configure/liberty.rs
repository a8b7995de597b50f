use cfkit_core::BuildType;
use cfkit_ir::DeploymentConfig;
use cfkit_project::{Options, Project};

use super::java::push_command;

const IGNORE: [&str; 6] = [
    "/.classpath",
    "/.project",
    "/.settings",
    "/src/main/liberty/config/server.env",
    "target/",
    "build/",
];

pub(super) fn apply(config: &mut DeploymentConfig, name: &str, project: &Project, options: &Options) {
    config.ignore = IGNORE.into_iter().collect();

    let manifest = &mut config.manifest;
    manifest.buildpack = "liberty-for-java".to_string();
    manifest.default_memory("512M");

    let artifact = match options.build_type {
        BuildType::Maven => format!("target/{name}.zip"),
        BuildType::Gradle => format!("build/{name}.zip"),
    };
    manifest.path = Some(format!("./{artifact}"));

    // Services bound through the pipeline must not be autoconfigured by the
    // buildpack as well.
    let mut excludes = Vec::new();
    if project.has_cloudant() {
        excludes.push("cloudantNoSQLDB=config");
    }
    if project.has_object_storage() {
        excludes.push("Object-Storage=config");
    }
    if !excludes.is_empty() {
        manifest.set_env("services_autoconfig_excludes", excludes.join(" "));
    }

    config.pipeline.push_command = Some(push_command(&artifact));
}
