//! Aggregate statistics for the operator.
//!
//! The record count covers every record, enabled or not. The size estimate
//! covers only enabled records with a known size, since that is what the
//! installer will actually download.

use serde::Serialize;

use crate::library::{Catalog, Category};
use crate::domain::ResourceRecord;

/// Counts and sizes for one group of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// All records, enabled or not
    pub total: usize,

    /// Records that end up in the manifest
    pub enabled: usize,

    /// Sum of `size_mb` over enabled records with a size
    pub size_mb: u64,
}

impl Tally {
    fn of<'a>(records: impl IntoIterator<Item = &'a ResourceRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut tally, record| {
            tally.total += 1;
            if record.enabled {
                tally.enabled += 1;
                tally.size_mb = tally.size_mb.saturating_add(record.size_mb.unwrap_or(0));
            }
            tally
        })
    }

    /// Estimated size in gigabytes
    pub fn size_gb(&self) -> f64 {
        self.size_mb as f64 / 1024.0
    }
}

/// Catalog-wide summary with a per-category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub overall: Tally,
    pub by_category: Vec<(Category, Tally)>,
}

impl Summary {
    /// Compute the summary for a catalog
    pub fn compute(catalog: &Catalog) -> Self {
        Self {
            overall: Tally::of(catalog.iter()),
            by_category: catalog
                .categories()
                .map(|(category, records)| (category, Tally::of(records)))
                .collect(),
        }
    }

    /// Total record count, regardless of enabled state
    pub fn total_records(&self) -> usize {
        self.overall.total
    }

    /// Estimated download size, one decimal place (e.g. "0.7 GB")
    pub fn size_display(&self) -> String {
        format!("{:.1} GB", self.overall.size_gb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{License, ResourceType};

    fn vae(path: &str, size_mb: Option<u64>) -> ResourceRecord {
        let record =
            ResourceRecord::new(path, "https://example.com/vae", ResourceType::Vae, License::CreativeMl);
        match size_mb {
            Some(size) => record.with_size_mb(size),
            None => record,
        }
    }

    #[test]
    fn test_two_vae_records() {
        let catalog = Catalog::new()
            .with(Category::Vae, vae("a", Some(335)))
            .with(Category::Vae, vae("b", Some(335)));

        let summary = Summary::compute(&catalog);
        assert_eq!(summary.total_records(), 2);
        assert_eq!(summary.overall.size_mb, 670);
        assert_eq!(summary.size_display(), "0.7 GB");
    }

    #[test]
    fn test_disabled_counted_but_not_sized() {
        let catalog = Catalog::new()
            .with(Category::Vae, vae("a", Some(1024)))
            .with(Category::Vae, vae("b", Some(2048)).disabled())
            .with(Category::Vae, vae("c", None));

        let summary = Summary::compute(&catalog);
        assert_eq!(summary.overall.total, 3);
        assert_eq!(summary.overall.enabled, 2);
        assert_eq!(summary.size_display(), "1.0 GB");
    }

    #[test]
    fn test_size_saturates_instead_of_overflowing() {
        let catalog = Catalog::new()
            .with(Category::Vae, vae("a", Some(u64::MAX)))
            .with(Category::Vae, vae("b", Some(10)));

        let summary = Summary::compute(&catalog);
        assert_eq!(summary.overall.size_mb, u64::MAX);
        assert_eq!(summary.overall.total, 2);
    }

    #[test]
    fn test_breakdown_covers_every_category() {
        let summary = Summary::compute(&Catalog::builtin());

        let categories: Vec<Category> = summary.by_category.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let sum: usize = summary.by_category.iter().map(|(_, t)| t.total).sum();
        assert_eq!(sum, summary.total_records());
    }

    #[test]
    fn test_builtin_size() {
        // 7200 + 7500 + 670 + 595 MB
        let summary = Summary::compute(&Catalog::builtin());
        assert_eq!(summary.overall.size_mb, 15965);
        assert_eq!(summary.size_display(), "15.6 GB");
    }
}
