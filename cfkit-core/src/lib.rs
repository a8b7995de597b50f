//! Core utilities and types for cfkit.
//!
//! This crate provides fundamental types and the file service collaborator
//! used across the cfkit crates.

mod file;
mod service;
mod types;

// File operations
pub use file::File;
pub use service::{DiskFileService, FileService, MemoryFileService};
// Fundamental types
pub use types::{BuildType, Platform, RepoType};
