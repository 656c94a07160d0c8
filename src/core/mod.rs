//! Core catalog processing.
//!
//! This module contains:
//! - Validator: catalog-wide invariant checks
//! - Manifest: `resources.txt` generation and parsing
//! - Summary: counts and size estimates
//! - Pipeline: the validate/generate/write pass

pub mod manifest;
pub mod pipeline;
pub mod summary;
pub mod validator;

// Re-export commonly used types
pub use manifest::{generate, parse_manifest, ManifestEntry};
pub use pipeline::{run, Outcome};
pub use summary::{Summary, Tally};
pub use validator::{validate, ValidationError};
