//! Configuration records for the cfkit generation pipeline.
//!
//! These are the structures the configurator derives from a project and the
//! renderer turns into files.
//!
//! # Architecture
//!
//! ```text
//! project.json → cfkit-project (input) → cfkit-ir (records) → cfkit-codegen (files)
//! ```

mod delivery;
mod ignore;
mod manifest;

pub use delivery::{BuildJobProps, PipelineConfig, ToolchainConfig};
pub use ignore::IgnoreList;
pub use manifest::ManifestConfig;
use cfkit_core::Platform;
use serde::Serialize;

/// The records produced by one configuration pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentConfig {
    pub platform: Platform,
    pub manifest: ManifestConfig,
    pub ignore: IgnoreList,
    pub toolchain: ToolchainConfig,
    pub pipeline: PipelineConfig,
}
