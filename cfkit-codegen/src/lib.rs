//! Deployment configuration derivation and artifact rendering for cfkit.
//!
//! A generation pass runs three stages, strictly forward:
//!
//! ```text
//! InputContext → configure → normalize → (platforms gate) → render → files
//! ```
//!
//! - [`configure`] derives the manifest, ignore list, toolchain and pipeline
//!   records through the rules of the declared backend platform
//! - [`normalize`] drops an empty environment and flattens the ignore list
//! - [`render`] merges each record into its template and writes the result
//!   through a [`FileService`](cfkit_core::FileService)
//!
//! [`Pipeline`] runs all three.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod configure;
mod error;
mod normalize;
mod pipeline;
mod render;
mod template;

pub use configure::configure;
pub use error::{Error, Result};
pub use normalize::{NormalizedConfig, normalize};
pub use pipeline::{GenerateReport, Pipeline, TARGET};
pub use render::{Artifact, render};
pub use template::{MiniJinjaRenderer, TemplateRenderer};
