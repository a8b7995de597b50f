use std::path::PathBuf;

use cfkit_core::{BuildType, RepoType};
use cfkit_project::{InputContext, Options, Project};
use clap::Args;

/// Project descriptor and generation options shared by `generate` and
/// `check`.
#[derive(Args, Debug)]
pub struct GenerationArgs {
    /// Project descriptor written by the scaffolder (.json or .toml)
    #[arg(default_value = "project.json")]
    pub project: PathBuf,

    /// Application name for Java and Spring projects
    #[arg(long)]
    pub app_name: Option<String>,

    /// Scaffolder create type, e.g. bff/liberty or enable/spring
    #[arg(long)]
    pub create_type: Option<String>,

    /// Build tool for Java and Spring projects
    #[arg(long, value_name = "maven|gradle")]
    pub build_type: Option<BuildType>,

    /// Application version, used in Spring jar names
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Whether the toolchain clones or links the repository
    #[arg(long, value_name = "clone|link")]
    pub repo_type: Option<RepoType>,

    /// Enabled output targets, comma separated. Without values nothing is
    /// written.
    #[arg(long, value_delimiter = ',', num_args = 0..=1)]
    pub platforms: Option<Vec<String>>,
}

impl GenerationArgs {
    pub fn options(&self) -> Options {
        Options {
            app_name: self.app_name.clone(),
            create_type: self.create_type.clone(),
            build_type: self.build_type.unwrap_or_default(),
            version: self.app_version.clone(),
            repo_type: self.repo_type.unwrap_or_default(),
            platforms: self.platforms.clone(),
        }
    }

    /// Load the project descriptor and combine it with the options.
    pub fn load(&self) -> cfkit_project::Result<InputContext> {
        let project = Project::from_file(&self.project)?;
        Ok(InputContext::new(project, self.options()))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerationArgs,
    }

    fn parse(argv: &[&str]) -> GenerationArgs {
        TestCli::try_parse_from(std::iter::once("cfkit").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let options = args.options();

        assert_eq!(args.project, PathBuf::from("project.json"));
        assert_eq!(options.build_type, BuildType::Maven);
        assert_eq!(options.repo_type, RepoType::Clone);
        assert_eq!(options.platforms, None);
    }

    #[test]
    fn test_all_options() {
        let options = parse(&[
            "app.toml",
            "--app-name",
            "acme",
            "--create-type",
            "enable/spring",
            "--build-type",
            "gradle",
            "--app-version",
            "1.0",
            "--repo-type",
            "link",
            "--platforms",
            "bluemix,kube",
        ])
        .options();

        assert_eq!(options.app_name(), Some("acme"));
        assert_eq!(options.create_type(), Some("enable/spring"));
        assert_eq!(options.build_type, BuildType::Gradle);
        assert_eq!(options.version(), Some("1.0"));
        assert_eq!(options.repo_type, RepoType::Link);
        assert!(options.is_target_enabled("kube"));
    }

    #[test]
    fn test_platforms_without_values_enable_nothing() {
        let options = parse(&["--platforms"]).options();
        assert_eq!(options.platforms, Some(vec![]));
        assert!(!options.is_target_enabled("bluemix"));
    }

    #[test]
    fn test_platforms_do_not_swallow_the_project_path() {
        let args = parse(&["--platforms", "bluemix,kube", "app.json"]);
        assert_eq!(args.project, PathBuf::from("app.json"));
        assert_eq!(
            args.options().platforms,
            Some(vec!["bluemix".to_string(), "kube".to_string()])
        );
    }

    #[test]
    fn test_invalid_build_type() {
        let result = TestCli::try_parse_from(["cfkit", "--build-type", "ant"]);
        assert!(result.is_err());
    }
}
