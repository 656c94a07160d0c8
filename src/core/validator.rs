//! Catalog-wide invariant checks.
//!
//! Checked in order:
//! - Every target path is unique across all categories
//! - No record carries a disallowed (non-redistributable) license

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::library::Catalog;

/// Reasons a catalog is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Duplicate target paths: {}", .paths.join(", "))]
    DuplicatePath { paths: Vec<String> },

    #[error("{} resource(s) under a non-commercial license: {}", .paths.len(), .paths.join(", "))]
    DisallowedLicense { paths: Vec<String> },
}

impl ValidationError {
    /// Target paths of the offending records
    pub fn paths(&self) -> &[String] {
        match self {
            ValidationError::DuplicatePath { paths } => paths,
            ValidationError::DisallowedLicense { paths } => paths,
        }
    }
}

/// Validate the catalog, returning the total record count on success
pub fn validate(catalog: &Catalog) -> Result<usize, ValidationError> {
    let records: Vec<_> = catalog.iter().collect();

    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for record in &records {
        let path = record.target_path.as_str();
        if !seen.insert(path) && !duplicates.iter().any(|d| d == path) {
            duplicates.push(path.to_string());
        }
    }
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicatePath { paths: duplicates });
    }

    let disallowed: Vec<String> = records
        .iter()
        .filter(|r| r.license.is_disallowed())
        .map(|r| r.target_path.clone())
        .collect();
    if !disallowed.is_empty() {
        return Err(ValidationError::DisallowedLicense { paths: disallowed });
    }

    debug!(records = records.len(), "Catalog validated");
    Ok(records.len())
}
