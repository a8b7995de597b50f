use cfkit_ir::DeploymentConfig;

const IGNORE: [&str; 4] = [".git/", "node_modules/", "test/", "vcap-local.js"];

pub(super) fn apply(config: &mut DeploymentConfig) {
    config.manifest.buildpack = "sdk-for-nodejs".to_string();
    config.manifest.command = Some("npm start".to_string());
    config.manifest.default_memory("256M");
    config.ignore = IGNORE.into_iter().collect();
}
