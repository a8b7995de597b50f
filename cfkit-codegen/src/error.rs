use std::path::PathBuf;

use cfkit_core::Platform;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Value reported when the project declares no backend platform at all.
pub(crate) const MISSING_PLATFORM: &str = "<missing>";

/// Fatal errors of a generation pass. Nothing is cleaned up; re-running is
/// the only recovery.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("language '{value}' was not one of the valid languages: NODE, SWIFT, JAVA, SPRING or PYTHON")]
    #[diagnostic(
        code(cfkit::unsupported_platform),
        help("set 'backendPlatform' in the project descriptor")
    )]
    UnsupportedPlatform { value: String },

    #[error("{platform} projects need an application name")]
    #[diagnostic(
        code(cfkit::missing_name),
        help("declare 'name' (or 'server.name') in the project descriptor, or pass --app-name")
    )]
    MissingName { platform: Platform },

    #[error("SPRING projects need an application version")]
    #[diagnostic(code(cfkit::missing_version), help("pass --app-version"))]
    MissingVersion,

    #[error("failed to render template '{name}': {message}")]
    #[diagnostic(code(cfkit::template_error))]
    Template { name: String, message: String },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(cfkit::write_error))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn unsupported_platform(value: Option<&str>) -> Self {
        Error::UnsupportedPlatform {
            value: value.unwrap_or(MISSING_PLATFORM).to_string(),
        }
    }

    /// Wrap a template engine failure. The alternate form keeps the
    /// engine's own context (line and template excerpt) in the message.
    pub fn template(name: &str, err: impl std::fmt::Display) -> Self {
        Error::Template {
            name: name.to_string(),
            message: format!("{err:#}"),
        }
    }
}
