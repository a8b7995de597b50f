//! Generate command report data structures.

use std::path::PathBuf;

use cfkit_codegen::TARGET;
use cfkit_core::{File, Platform};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Backend platform the files were derived for.
    pub platform: Platform,
    /// Application name, if one was resolved.
    pub name: Option<String>,
    /// Whether the `platforms` option switched rendering off.
    pub gated: bool,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview, in write order.
    Preview(Vec<File>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub files: Vec<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "{} {}",
            self.platform,
            self.name.as_deref().unwrap_or("(unnamed)")
        ));

        if self.gated {
            out.preformatted(&format!(
                "Nothing written: '{TARGET}' is not an enabled platform"
            ));
            return;
        }

        out.newline();
        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            out.added_item(&written.output_dir.join(file).display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[File]) {
        for file in files {
            out.divider(&file.path().display().to_string());
            out.preformatted(file.content());
        }

        out.divider("Summary");
        if self.gated {
            out.preformatted(&format!(
                "No files would be generated: '{TARGET}' is not an enabled platform"
            ));
        } else {
            out.preformatted(&format!("{} files would be generated", files.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_lists_files_under_output_dir() {
        let report = GenerateReport {
            platform: Platform::Node,
            name: Some("acme".to_string()),
            gated: false,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                files: vec![PathBuf::from("manifest.yml"), PathBuf::from(".cfignore")],
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "NODE acme",
                "",
                "Generated (2):",
                "  + out/manifest.yml",
                "  + out/.cfignore",
            ]
        );
    }

    #[test]
    fn test_gated_run_explains_why() {
        let report = GenerateReport {
            platform: Platform::Swift,
            name: None,
            gated: true,
            result: GenerationResult::Preview(vec![]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(out.text().contains("'bluemix' is not an enabled platform"));
    }
}
