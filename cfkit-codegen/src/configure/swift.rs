use cfkit_ir::DeploymentConfig;

const IGNORE: [&str; 2] = [".build/*", "Packages/*"];

/// Swift apps are started by their executable, which carries the app name.
pub(super) fn apply(config: &mut DeploymentConfig) {
    config.manifest.buildpack = "swift_buildpack".to_string();
    config.manifest.command = config.manifest.name.clone().filter(|n| !n.is_empty());
    config.manifest.default_memory("128M");
    config.ignore = IGNORE.into_iter().collect();
}
