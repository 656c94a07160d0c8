//! `resources.txt` manifest generation and parsing.
//!
//! Format:
//!
//! ```text
//! # comment lines start with '#'
//! <target_path>,<source_url>
//! ```
//!
//! Blank lines are ignored. Consumers split entry lines on the first comma.
//! Commas inside paths are not escaped.

use serde::Serialize;

use crate::library::{Catalog, Category};

const BANNER: &[&str] = &[
    "# ================================================================",
    "# Stable Diffusion WebUI Forge - Resources Configuration",
    "# Auto-generated by forge-resources",
    "# ================================================================",
];

/// Comment line that opens a category's section
pub fn category_header(category: Category) -> &'static str {
    match category {
        Category::Extensions => "# ======== Extensions ========",
        Category::ControlnetSd15 => "# ======== ControlNet v1.1 Models (SD 1.5) ========",
        Category::ControlnetSdxl => {
            "# ======== ControlNet SDXL Models (official HuggingFace sources) ========"
        }
        Category::Vae => "# ======== VAE Models ========",
        Category::Upscalers => "# ======== Upscaler Models ========",
    }
}

/// Fixed annotation lines printed under a category header
pub fn category_notes(category: Category) -> &'static [&'static str] {
    match category {
        Category::ControlnetSdxl => {
            &["# Recommended: get the Union model first (one model covers 10+ control conditions)"]
        }
        Category::Upscalers => &[
            "# Recommended for fabric/garment detail upscaling:",
            "# - SwinIR Large (best detail, quality 9.7/10)",
            "# - HAT (best on real photos)",
            "# - Tile ControlNet + Ultimate SD Upscale (combined workflow)",
        ],
        _ => &[],
    }
}

/// Render the manifest for every enabled record
pub fn generate(catalog: &Catalog) -> String {
    let mut lines: Vec<String> = BANNER.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());

    for (category, records) in catalog.categories() {
        lines.push(category_header(category).to_string());
        lines.extend(category_notes(category).iter().map(|l| l.to_string()));
        lines.extend(
            records
                .iter()
                .filter(|r| r.enabled)
                .map(|r| r.manifest_line()),
        );
        lines.push(String::new());
    }

    // The final separator is empty, so joining leaves exactly one trailing newline
    lines.join("\n")
}

/// One `path,url` pair as a downstream installer reads it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub target_path: String,
    pub source_url: String,
}

/// Parse manifest text the way the installer does
///
/// Comment and blank lines are skipped. Lines without a comma are skipped too.
/// Entry lines are split as-is; surrounding whitespace belongs to the fields.
pub fn parse_manifest(text: &str) -> Vec<ManifestEntry> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once(','))
        .map(|(path, url)| ManifestEntry {
            target_path: path.to_string(),
            source_url: url.to_string(),
        })
        .collect()
}
