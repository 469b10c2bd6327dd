//! Route handlers.

pub mod catalog;
pub mod fallback;
pub mod media;
pub mod streaming_helpers;
