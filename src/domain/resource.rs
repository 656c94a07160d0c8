//! Resource records and their tags.
//!
//! A record describes one downloadable artifact: an extension repository,
//! a model checkpoint, a VAE, an upscaler and so on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting record fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid priority: {0} (expected 0, 1 or 2)")]
    InvalidPriority(u8),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// What kind of artifact a record points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Extension,
    ModelSd15,
    ModelSdxl,
    ModelFlux,
    ControlnetSd15,
    ControlnetSdxl,
    Vae,
    TextEncoder,
    Lora,
    Embedding,
    Upscaler,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceType::Extension => "extension",
            ResourceType::ModelSd15 => "model_sd15",
            ResourceType::ModelSdxl => "model_sdxl",
            ResourceType::ModelFlux => "model_flux",
            ResourceType::ControlnetSd15 => "controlnet_sd15",
            ResourceType::ControlnetSdxl => "controlnet_sdxl",
            ResourceType::Vae => "vae",
            ResourceType::TextEncoder => "text_encoder",
            ResourceType::Lora => "lora",
            ResourceType::Embedding => "embedding",
            ResourceType::Upscaler => "upscaler",
        };
        f.write_str(s)
    }
}

/// License a resource is distributed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "Apache 2.0")]
    Apache20,

    #[serde(rename = "MIT")]
    Mit,

    #[serde(rename = "OpenRAIL")]
    OpenRail,

    #[serde(rename = "CreativeML Open RAIL-M")]
    CreativeMl,

    /// Not redistributable; a catalog containing it fails validation
    #[serde(rename = "Non-Commercial")]
    NonCommercial,
}

impl License {
    /// Whether records under this license are barred from the catalog
    pub fn is_disallowed(self) -> bool {
        matches!(self, License::NonCommercial)
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            License::Apache20 => "Apache 2.0",
            License::Mit => "MIT",
            License::OpenRail => "OpenRAIL",
            License::CreativeMl => "CreativeML Open RAIL-M",
            License::NonCommercial => "Non-Commercial",
        };
        f.write_str(s)
    }
}

/// Download priority. Informational only; nothing branches on it.
///
/// Serialized as its rank: 0 = required, 1 = recommended, 2 = optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    Required,
    Recommended,
    Optional,
}

impl TryFrom<u8> for Priority {
    type Error = CatalogError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            0 => Ok(Priority::Required),
            1 => Ok(Priority::Recommended),
            2 => Ok(Priority::Optional),
            other => Err(CatalogError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Required => 0,
            Priority::Recommended => 1,
            Priority::Optional => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Required => write!(f, "required"),
            Priority::Recommended => write!(f, "recommended"),
            Priority::Optional => write!(f, "optional"),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// One addressable downloadable artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Destination relative to the WebUI root
    pub target_path: String,

    /// Git repository or direct file URL
    pub source_url: String,

    pub resource_type: ResourceType,

    pub license: License,

    /// Human-readable label
    #[serde(default)]
    pub description: String,

    /// Approximate download size in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<u64>,

    #[serde(default)]
    pub priority: Priority,

    /// Disabled records are left out of the manifest
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl ResourceRecord {
    /// Create an enabled, required record with no description or size
    pub fn new(
        target_path: impl Into<String>,
        source_url: impl Into<String>,
        resource_type: ResourceType,
        license: License,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            source_url: source_url.into(),
            resource_type,
            license,
            description: String::new(),
            size_mb: None,
            priority: Priority::Required,
            enabled: true,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the size in megabytes
    pub fn with_size_mb(mut self, size_mb: u64) -> Self {
        self.size_mb = Some(size_mb);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the record as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The `path,url` manifest line for this record
    pub fn manifest_line(&self) -> String {
        format!("{},{}", self.target_path, self.source_url)
    }
}
