//! Catalog data model.
//!
//! These types are immutable snapshots of the media root taken during a
//! single walk. Their JSON shape is the `/files.json` wire format.

use std::collections::HashMap;

use lr_core::MediaType;
use serde::{Deserialize, Serialize};

/// One discovered file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// File name without any directory components.
    pub name: String,
    /// Path relative to the media root, using platform separators.
    #[serde(rename = "path")]
    pub relative_path: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Modification time in seconds since the UNIX epoch.
    pub modified: f64,
}

/// Episodes sharing a series folder, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub name: String,
    pub files: Vec<CatalogEntry>,
}

/// The full listing returned by the catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub movies: Vec<CatalogEntry>,
    pub series: Vec<SeriesGroup>,
}

impl Catalog {
    /// Number of entries across movies and every series group.
    pub fn total_files(&self) -> usize {
        self.movies.len() + self.series.iter().map(|s| s.files.len()).sum::<usize>()
    }
}

/// Accumulates entries while walking, keeping series groups in first-seen
/// order.
#[derive(Debug, Default)]
pub(crate) struct CatalogBuilder {
    catalog: Catalog,
    series_index: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub(crate) fn push_movie(&mut self, entry: CatalogEntry) {
        self.catalog.movies.push(entry);
    }

    pub(crate) fn push_episode(&mut self, series_name: &str, entry: CatalogEntry) {
        let idx = match self.series_index.get(series_name) {
            Some(&idx) => idx,
            None => {
                let idx = self.catalog.series.len();
                self.catalog.series.push(SeriesGroup {
                    name: series_name.to_string(),
                    files: Vec::new(),
                });
                self.series_index.insert(series_name.to_string(), idx);
                idx
            }
        };
        self.catalog.series[idx].files.push(entry);
    }

    pub(crate) fn finish(self) -> Catalog {
        self.catalog
    }
}
