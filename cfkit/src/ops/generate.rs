//! Generate operation - deployment files from a project descriptor.

use std::path::Path;

use cfkit_codegen::{Pipeline, Result};
use cfkit_core::{DiskFileService, File, FileService, MemoryFileService};
use cfkit_project::InputContext;

use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the files are written below.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// A dry run renders into memory and returns the file contents in write
/// order; otherwise the files are written below `output_dir`.
pub fn generate(input: &InputContext, opts: GenerateOptions) -> Result<GenerateReport> {
    let pipeline = Pipeline::new();

    let (run, result) = if opts.dry_run {
        let mut fs = MemoryFileService::new();
        let run = pipeline.run(input, &mut fs)?;
        let files = run
            .written
            .iter()
            .filter_map(|path| Some(File::new(path, fs.read(path).ok()?)))
            .collect();
        (run, GenerationResult::Preview(files))
    } else {
        let mut fs = DiskFileService::new(opts.output_dir);
        let run = pipeline.run(input, &mut fs)?;
        let result = GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: run.written.clone(),
        });
        (run, result)
    };

    Ok(GenerateReport {
        platform: run.config.platform,
        name: run.config.manifest.name,
        gated: run.gated,
        result,
    })
}

#[cfg(test)]
mod tests {
    use cfkit_project::{Options, Project};
    use tempfile::TempDir;

    use super::*;

    fn node_input(platforms: Option<Vec<String>>) -> InputContext {
        InputContext::new(
            Project {
                backend_platform: Some("NODE".to_string()),
                name: Some("acme".to_string()),
                ..Default::default()
            },
            Options {
                platforms,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &node_input(None),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 5);
        assert_eq!(files[0].path(), Path::new("manifest.yml"));
        assert!(files[0].content().contains("buildpack: sdk-for-nodejs"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_writes_to_output_dir() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &node_input(None),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.name.as_deref(), Some("acme"));
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(written.files.len(), 5);
        assert!(dir.path().join(".bluemix/deploy.json").is_file());
    }

    #[test]
    fn test_gated_run() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &node_input(Some(vec!["kube".to_string()])),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.gated);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
