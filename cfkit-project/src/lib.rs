//! Input context for cfkit: the scaffolder's project descriptor plus the
//! generation options.
//!
//! Descriptors are JSON (as written by the scaffolder) or TOML. Load errors
//! are [`miette`] diagnostics that point into the offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod error;
mod options;
mod project;

pub use cfkit_core::{BuildType, Platform, RepoType};
pub use context::InputContext;
pub use error::{Error, Result, SourceContext};
pub use options::Options;
pub use project::{Format, Project, Server, parse_project};
