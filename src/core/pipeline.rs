//! The validate -> generate -> write -> summarize pass.
//!
//! Strictly sequential. A rejected catalog stops the pass before anything
//! touches the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, instrument, warn};

use super::manifest::generate;
use super::summary::Summary;
use super::validator::{validate, ValidationError};
use crate::library::Catalog;

/// Result of one pipeline pass
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Manifest written to `path`
    Written {
        path: PathBuf,
        records: usize,
        summary: Summary,
    },

    /// Validation failed; no file was written
    Rejected(ValidationError),
}

impl Outcome {
    /// Whether the manifest was written
    pub fn is_written(&self) -> bool {
        matches!(self, Outcome::Written { .. })
    }
}

/// Validate the catalog and, if it passes, write the manifest to `output`
#[instrument(skip(catalog, output), fields(output = %output.display()))]
pub async fn run(catalog: &Catalog, output: &Path) -> Result<Outcome> {
    let records = match validate(catalog) {
        Ok(records) => records,
        Err(e) => {
            warn!(offending = e.paths().len(), "Catalog rejected");
            return Ok(Outcome::Rejected(e));
        }
    };

    let content = generate(catalog);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(output, content.as_bytes())
        .await
        .with_context(|| format!("Failed to write manifest: {}", output.display()))?;

    info!(records, bytes = content.len(), "Manifest written");

    Ok(Outcome::Written {
        path: output.to_path_buf(),
        records,
        summary: Summary::compute(catalog),
    })
}
