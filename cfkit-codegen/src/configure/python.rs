use cfkit_ir::DeploymentConfig;

const IGNORE: [&str; 2] = [".pyc", ".egg-info"];

pub(super) fn apply(config: &mut DeploymentConfig) {
    let manifest = &mut config.manifest;
    manifest.buildpack = "python_buildpack".to_string();
    manifest.command = Some("gunicorn server:app -b 0.0.0.0:$PORT".to_string());
    manifest.default_memory("128M");
    manifest.set_env("FLASK_APP", "server");
    manifest.set_env("FLASK_DEBUG", "true");
    config.ignore = IGNORE.into_iter().collect();
}
