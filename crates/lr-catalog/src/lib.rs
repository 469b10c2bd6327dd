//! lr-catalog: builds the browsable movie/series listing of a media root.
//!
//! The builder walks the root once per call, drops hidden, system and
//! archive files, and sorts what remains into movies and named series
//! groups based on the first two path segments. Nothing is cached.

pub mod builder;
pub mod filter;
pub mod model;

pub use builder::{build_catalog, try_build_catalog};
pub use model::{Catalog, CatalogEntry, SeriesGroup};
