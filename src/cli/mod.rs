//! Command-line interface for forge-resources.
//!
//! Running without a subcommand validates the catalog and writes
//! `resources.txt`, same as `forge-resources generate`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::Pattern;

use crate::config::{self, Overrides, ResolvedConfig};
use crate::core::{Outcome, Summary, ValidationError};
use crate::domain::ResourceRecord;
use crate::library::{Catalog, Category};

/// forge-resources - Resource catalog and manifest generator for WebUI Forge
#[derive(Parser, Debug)]
#[command(name = "forge-resources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to use instead of the built-in catalog
    #[arg(long, global = true, env = "FORGE_RESOURCES_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Manifest output path when no subcommand is given (default: ./resources.txt)
    #[arg(short, long, env = "FORGE_RESOURCES_OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the catalog and write the manifest (default)
    Generate {
        /// Manifest output path (default: ./resources.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the catalog without writing anything
    Validate,

    /// List catalog entries
    List {
        /// Only show one category (extensions, controlnet-sd15, controlnet-sdxl, vae, upscalers)
        #[arg(short, long)]
        category: Option<Category>,

        /// Glob over target paths (e.g. "models/ESRGAN/*")
        #[arg(short, long)]
        pattern: Option<String>,

        /// Include disabled entries
        #[arg(short, long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-category counts and estimated sizes
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write the catalog as YAML (stdout if no path is given)
    Export {
        /// Destination file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let command = self.command.unwrap_or(Commands::Generate { output: None });

        // Only the manifest path feeds configuration; `export --output` is a separate file
        let manifest_output = match &command {
            Commands::Generate { output } => output.clone().or(self.output),
            _ => self.output,
        };
        let cfg = config::load(Overrides {
            output: manifest_output,
            catalog: self.catalog,
        })?;

        match command {
            Commands::Generate { .. } => generate(&cfg).await,
            Commands::Validate => validate(&cfg),
            Commands::List {
                category,
                pattern,
                all,
                json,
            } => list(&cfg, category, pattern.as_deref(), all, json),
            Commands::Stats { json } => stats(&cfg, json),
            Commands::Export { output } => export(&cfg, output.as_deref()),
            Commands::Config => show_config(&cfg),
        }
    }
}

/// Render validation diagnostics, one offending path per line
fn render_rejection(error: &ValidationError) -> String {
    let mut report = match error {
        ValidationError::DuplicatePath { .. } => "✗ Duplicate target paths found:\n".to_string(),
        ValidationError::DisallowedLicense { paths } => {
            format!("⚠ Found {} non-commercial resource(s):\n", paths.len())
        }
    };
    for path in error.paths() {
        report.push_str(&format!("   - {}\n", path));
    }
    report
}

fn print_summary(summary: &Summary) {
    println!("Total resources: {}", summary.total_records());
    println!("Estimated size:  {}", summary.size_display());
}

/// Full pipeline: validate, write manifest, summarize
async fn generate(cfg: &ResolvedConfig) -> Result<()> {
    let catalog = cfg.load_catalog()?;

    match crate::core::run(&catalog, &cfg.output).await? {
        Outcome::Written {
            path,
            records,
            summary,
        } => {
            println!("✓ Catalog valid ({} resources)", records);
            println!("✓ Wrote {}", path.display());
            print_summary(&summary);
            Ok(())
        }
        Outcome::Rejected(error) => {
            print!("{}", render_rejection(&error));
            println!("\n[Manifest not written]");
            std::process::exit(1);
        }
    }
}

fn validate(cfg: &ResolvedConfig) -> Result<()> {
    let catalog = cfg.load_catalog()?;

    match crate::core::validate(&catalog) {
        Ok(records) => {
            println!("✓ Catalog valid ({} resources)", records);
            Ok(())
        }
        Err(error) => {
            print!("{}", render_rejection(&error));
            std::process::exit(1);
        }
    }
}

/// Select records for `list`
fn select<'a>(
    catalog: &'a Catalog,
    category: Option<Category>,
    pattern: Option<&Pattern>,
    include_disabled: bool,
) -> Vec<(Category, &'a ResourceRecord)> {
    catalog
        .categories()
        .filter(|(c, _)| category.map_or(true, |wanted| wanted == *c))
        .flat_map(|(c, records)| records.iter().map(move |r| (c, r)))
        .filter(|(_, r)| include_disabled || r.enabled)
        .filter(|(_, r)| pattern.map_or(true, |p| p.matches(&r.target_path)))
        .collect()
}

fn list(
    cfg: &ResolvedConfig,
    category: Option<Category>,
    pattern: Option<&str>,
    include_disabled: bool,
    json: bool,
) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let pattern = pattern
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: {}", p)))
        .transpose()?;

    let selected = select(&catalog, category, pattern.as_ref(), include_disabled);

    if json {
        let records: Vec<&ResourceRecord> = selected.iter().map(|(_, r)| *r).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No matching resources.");
        return Ok(());
    }

    println!("{:<16} {:<11} {:>8}  {}", "CATEGORY", "PRIORITY", "SIZE", "PATH");
    for (category, record) in &selected {
        let size = record
            .size_mb
            .map(|mb| format!("{} MB", mb))
            .unwrap_or_else(|| "-".to_string());
        let marker = if record.enabled { "" } else { "  (disabled)" };
        println!(
            "{:<16} {:<11} {:>8}  {}{}",
            category.key(),
            record.priority.to_string(),
            size,
            record.target_path,
            marker
        );
    }
    println!("\n{} resource(s)", selected.len());

    Ok(())
}

fn stats(cfg: &ResolvedConfig, json: bool) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let summary = Summary::compute(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:<16} {:>7} {:>7} {:>9}", "CATEGORY", "ENABLED", "TOTAL", "SIZE");
    for (category, tally) in &summary.by_category {
        println!(
            "{:<16} {:>7} {:>7} {:>6.1} GB",
            category.key(),
            tally.enabled,
            tally.total,
            tally.size_gb()
        );
    }
    println!();
    print_summary(&summary);

    Ok(())
}

fn export(cfg: &ResolvedConfig, path: Option<&Path>) -> Result<()> {
    let catalog = cfg.load_catalog()?;
    let yaml = catalog.to_yaml()?;

    match path {
        Some(path) => {
            std::fs::write(path, yaml)
                .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
            println!("✓ Exported {} resources to {}", catalog.len(), path.display());
        }
        None => print!("{}", yaml),
    }

    Ok(())
}

fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("forge-resources configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Output:      {}", cfg.output.display());
    println!(
        "Catalog:     {}",
        cfg.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );

    Ok(())
}
