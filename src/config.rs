//! Configuration for forge-resources.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags / environment variables (FORGE_RESOURCES_OUTPUT,
//!    FORGE_RESOURCES_CATALOG), both handled by clap
//! 2. Config file (.forge-resources/config.yaml)
//! 3. Defaults (./resources.txt, built-in catalog)
//!
//! Config file discovery:
//! - Searches the starting directory and parents for .forge-resources/config.yaml
//! - Paths in the config file are relative to the project root (the parent
//!   of .forge-resources/)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::library::Catalog;

/// Directory holding the config file
pub const CONFIG_DIR: &str = ".forge-resources";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Manifest file name used when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "resources.txt";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub version: String,
    /// Manifest output path
    #[serde(default)]
    pub output: Option<String>,
    /// Catalog file replacing the built-in catalog
    #[serde(default)]
    pub catalog: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Where the manifest is written
    pub output: PathBuf,
    /// Catalog file, or `None` for the built-in catalog
    pub catalog: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => {
                debug!(path = %path.display(), "Loading catalog file");
                Catalog::from_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Resolve configuration, discovering the config file from `start`
pub fn load_from(start: &Path, overrides: Overrides) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start);

    let (file_output, file_catalog) = match &config_file {
        Some(config_path) => {
            let config = load_config_file(config_path)?;

            // Project root is the grandparent of config.yaml
            let base_dir = config_path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(start);

            (
                config.output.map(|p| resolve_path(base_dir, &p)),
                config.catalog.map(|p| resolve_path(base_dir, &p)),
            )
        }
        None => (None, None),
    };

    let output = overrides
        .output
        .or(file_output)
        .unwrap_or_else(|| start.join(DEFAULT_OUTPUT));
    let catalog = overrides.catalog.or(file_catalog);

    Ok(ResolvedConfig {
        output,
        catalog,
        config_file,
    })
}

/// Resolve configuration from the current directory
pub fn load(overrides: Overrides) -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_from(&cwd, overrides)
}
