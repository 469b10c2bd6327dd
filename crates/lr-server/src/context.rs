//! Shared application context.
//!
//! [`AppContext`] is handed to every route handler via Axum state. It is
//! immutable after startup: the media root and static directory are fixed,
//! and each request does its own filesystem work against them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-server state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Absolute directory the catalog and media endpoints resolve against.
    pub media_root: Arc<PathBuf>,
    /// Directory served by the static-file fallback.
    pub static_dir: Arc<PathBuf>,
}

impl AppContext {
    pub fn new(media_root: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            media_root: Arc::new(media_root),
            static_dir: Arc::new(static_dir),
        }
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
