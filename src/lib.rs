//! forge-resources - Resource catalog and manifest generator
//!
//! Keeps the list of extensions and models that a Stable Diffusion WebUI
//! Forge install should fetch, checks it, and flattens it into the
//! `resources.txt` manifest read by the installer.
//!
//! # Pipeline
//!
//! - Validate: target paths are unique, no non-commercial licenses
//! - Generate: `path,url` lines for enabled records, grouped by category
//! - Write: one scoped write of the manifest file
//! - Summarize: record count and estimated download size
//!
//! # Modules
//!
//! - `domain`: Record types (ResourceRecord, License, ResourceType)
//! - `library`: The catalog and its built-in data
//! - `core`: Validation, manifest generation, summary, pipeline
//! - `config`: Output/catalog path resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Validate and write ./resources.txt
//! forge-resources
//!
//! # List the SDXL ControlNet models
//! forge-resources list --category controlnet-sdxl
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::core::{
    generate, parse_manifest, validate, ManifestEntry, Outcome, Summary, ValidationError,
};
pub use domain::{License, Priority, ResourceRecord, ResourceType};
pub use library::{Catalog, Category};
