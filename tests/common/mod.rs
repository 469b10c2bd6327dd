//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which lays out a temporary media root and static
//! directory and builds a full [`AppContext`]. The [`TestHarness::with_server`]
//! constructor starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use lr_server::context::AppContext;
use lr_server::router::build_router;
use tempfile::TempDir;

/// Test harness wrapping a temporary media root and static directory.
pub struct TestHarness {
    pub ctx: AppContext,
    pub media_root: PathBuf,
    pub static_dir: PathBuf,
    _dir: TempDir,
}

impl TestHarness {
    /// Create an empty media root and static directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let media_root = dir.path().join("media");
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&media_root).expect("failed to create media root");
        std::fs::create_dir_all(&static_dir).expect("failed to create static dir");

        let ctx = AppContext::new(media_root.clone(), static_dir.clone());
        Self {
            ctx,
            media_root,
            static_dir,
            _dir: dir,
        }
    }

    /// Write `bytes` to `rel` under the media root, creating parent folders.
    pub fn add_media(&self, rel: &str, bytes: &[u8]) -> PathBuf {
        write_file(&self.media_root, rel, bytes)
    }

    /// Write `bytes` to `rel` under the static directory.
    pub fn add_static(&self, rel: &str, bytes: &[u8]) -> PathBuf {
        write_file(&self.static_dir, rel, bytes)
    }

    /// Build the application router for this harness.
    pub fn router(&self) -> axum::Router {
        build_router(self.ctx.clone())
    }

    /// Start an Axum server on a random port and return the bound address.
    pub async fn serve(&self) -> SocketAddr {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        addr
    }

    /// Create a harness and start its server in one step.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let addr = harness.serve().await;
        (harness, addr)
    }
}

fn write_file(base: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    std::fs::write(&path, bytes).expect("failed to write file");
    path
}

/// Deterministic, non-repeating-looking test payload of `len` bytes.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
