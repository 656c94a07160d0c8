//! Domain types for the resource catalog.
//!
//! - ResourceRecord: one downloadable artifact
//! - ResourceType / License / Priority: closed tags on a record

pub mod resource;

pub use resource::{CatalogError, License, Priority, ResourceRecord, ResourceType};
