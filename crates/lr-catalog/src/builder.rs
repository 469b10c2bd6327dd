//! Directory walk and movie/series classification.
//!
//! Files are discovered with `walkdir` (symlinks followed, entries sorted by
//! name so repeated walks produce the same ordering). Per-file failures are
//! logged and skipped; only a missing or unreadable root is reported.

use std::path::{Component, Path};
use std::time::UNIX_EPOCH;

use lr_core::{Error, MediaType, Result};
use walkdir::WalkDir;

use crate::filter::is_excluded;
use crate::model::{Catalog, CatalogBuilder, CatalogEntry};

/// Top-level folder whose files are always movies.
const MOVIES_DIR: &str = "movies";

/// Top-level folder whose subfolders are series.
const SERIES_DIR: &str = "series";

/// Where a file lands in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Movie,
    Series(String),
}

/// Classify a file by the first two segments of its root-relative path.
///
/// Files under `movies/` (any depth), files at the root and files under any
/// other top-level folder are movies. Files under `series/<name>/` belong to
/// series `<name>`; a file directly under `series/` is its own series.
pub fn classify(relative: &Path) -> Placement {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    // A file sitting at the root has no top-level folder.
    if segments.len() < 2 {
        return Placement::Movie;
    }

    let top = segments[0].to_lowercase();
    if top == MOVIES_DIR {
        Placement::Movie
    } else if top == SERIES_DIR {
        if segments.len() > 2 {
            Placement::Series(segments[1].clone())
        } else {
            Placement::Series(segments[segments.len() - 1].clone())
        }
    } else {
        Placement::Movie
    }
}

/// Build the catalog for `root`, reporting a missing or unreadable root.
pub fn try_build_catalog(root: &Path) -> Result<Catalog> {
    let metadata =
        std::fs::metadata(root).map_err(|e| Error::from_io(e, root.display()))?;
    if !metadata.is_dir() {
        return Err(Error::not_found("media root", root.display()));
    }
    std::fs::read_dir(root).map_err(|e| Error::from_io(e, root.display()))?;

    tracing::info!(root = %root.display(), "Listing media files");

    let mut builder = CatalogBuilder::default();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Error walking directory");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if is_excluded(&file_name) {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        // A lossy catalog path could never be requested back.
        let Some(relative_str) = relative.to_str() else {
            tracing::debug!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };

        // Re-stat: the file may have vanished or changed since the
        // directory was read.
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "File vanished during walk");
                continue;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error accessing file");
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let modified = match metadata.modified() {
            Ok(time) => time
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or(0.0),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error reading modification time");
                continue;
            }
        };

        let entry = CatalogEntry {
            name: file_name,
            relative_path: relative_str.to_owned(),
            size_bytes: metadata.len(),
            media_type: MediaType::from_path(path),
            modified,
        };

        match classify(relative) {
            Placement::Movie => {
                tracing::debug!(name = %entry.name, "Added movie");
                builder.push_movie(entry);
            }
            Placement::Series(series) => {
                tracing::debug!(series = %series, name = %entry.name, "Added episode");
                builder.push_episode(&series, entry);
            }
        }
    }

    let catalog = builder.finish();
    tracing::info!(
        movies = catalog.movies.len(),
        series = catalog.series.len(),
        "Catalog built"
    );
    Ok(catalog)
}

/// Build the catalog for `root`.
///
/// A root that cannot be listed is logged and yields an empty catalog.
pub fn build_catalog(root: &Path) -> Catalog {
    try_build_catalog(root).unwrap_or_else(|e| {
        tracing::error!(root = %root.display(), error = %e, "Error listing files");
        Catalog::default()
    })
}
