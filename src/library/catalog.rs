//! Category-grouped catalog of resource records.
//!
//! The catalog is built once and then only read. Flattening always walks
//! categories in declaration order, then records in insertion order, so
//! anything derived from it (validation, manifest text) is reproducible.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{CatalogError, ResourceRecord};

/// Named group of records, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Extensions,
    #[serde(rename = "controlnet-sd15")]
    ControlnetSd15,
    #[serde(rename = "controlnet-sdxl")]
    ControlnetSdxl,
    Vae,
    Upscalers,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Extensions,
        Category::ControlnetSd15,
        Category::ControlnetSdxl,
        Category::Vae,
        Category::Upscalers,
    ];

    /// Stable key used in catalog files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Category::Extensions => "extensions",
            Category::ControlnetSd15 => "controlnet-sd15",
            Category::ControlnetSdxl => "controlnet-sdxl",
            Category::Vae => "vae",
            Category::Upscalers => "upscalers",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Immutable collection of records grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    groups: [Vec<ResourceRecord>; 5],
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a category
    pub fn with(mut self, category: Category, record: ResourceRecord) -> Self {
        self.groups[category.index()].push(record);
        self
    }

    /// Append several records to a category, keeping their order
    pub fn with_records(
        mut self,
        category: Category,
        records: impl IntoIterator<Item = ResourceRecord>,
    ) -> Self {
        self.groups[category.index()].extend(records);
        self
    }

    /// Records of one category in insertion order
    pub fn records(&self, category: Category) -> &[ResourceRecord] {
        &self.groups[category.index()]
    }

    /// All records: category declaration order, then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceRecord> + '_ {
        self.groups.iter().flatten()
    }

    /// Categories paired with their records, in declaration order
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[ResourceRecord])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.records(c)))
    }

    /// Total number of records, enabled or not
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Check if the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Load a catalog from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parse a catalog from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid catalog YAML")
    }

    /// Render the catalog as YAML in the catalog file format
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize catalog")
    }
}

/// On-disk layout: one list per category key.
///
/// Named fields pin the category order regardless of key order in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    extensions: Vec<ResourceRecord>,

    #[serde(default, rename = "controlnet-sd15")]
    controlnet_sd15: Vec<ResourceRecord>,

    #[serde(default, rename = "controlnet-sdxl")]
    controlnet_sdxl: Vec<ResourceRecord>,

    #[serde(default)]
    vae: Vec<ResourceRecord>,

    #[serde(default)]
    upscalers: Vec<ResourceRecord>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Self {
            groups: [
                file.extensions,
                file.controlnet_sd15,
                file.controlnet_sdxl,
                file.vae,
                file.upscalers,
            ],
        }
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        let [extensions, controlnet_sd15, controlnet_sdxl, vae, upscalers] = catalog.groups;
        Self {
            extensions,
            controlnet_sd15,
            controlnet_sdxl,
            vae,
            upscalers,
        }
    }
}
