//! lr-core: shared error type, configuration, media-type tables and path
//! resolution.
//!
//! This crate is the foundational dependency for the other lr-* crates.

pub mod config;
pub mod error;
pub mod media;
pub mod paths;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::MediaType;
