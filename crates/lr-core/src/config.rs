//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! server and library sections. Every section defaults sensibly so a
//! completely empty `{}` file is valid. Command-line flags and the
//! `FILE_PATH` environment variable are layered on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

/// Environment variable naming the media root.
pub const MEDIA_ROOT_ENV: &str = "FILE_PATH";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub library: LibraryConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if let Some(ref root) = self.library.root {
            if !root.is_dir() {
                warnings.push(format!(
                    "library.root {} is not a readable directory",
                    root.display()
                ));
            }
        }

        if let Some(ref dir) = self.server.static_dir {
            if !dir.is_dir() {
                warnings.push(format!(
                    "server.static_dir {} is not a directory",
                    dir.display()
                ));
            }
        }

        warnings
    }

    /// The media root to serve, made absolute.
    ///
    /// Falls back to the current working directory with a warning when no
    /// root has been configured.
    pub fn resolve_media_root(&self) -> Result<PathBuf> {
        let root = match self.library.root {
            Some(ref root) => root.clone(),
            None => {
                let cwd = std::env::current_dir()?;
                tracing::warn!(
                    "{MEDIA_ROOT_ENV} not set; defaulting media root to the current directory {}",
                    cwd.display()
                );
                cwd
            }
        };

        if root.is_absolute() {
            Ok(root)
        } else {
            Ok(std::env::current_dir()?.join(root))
        }
    }

    /// Directory served by the static-file fallback.
    pub fn resolve_static_dir(&self) -> Result<PathBuf> {
        match self.server.static_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Static-file fallback directory (`None` = working directory).
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8001,
            static_dir: None,
        }
    }
}

/// Media library settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory the catalog and media endpoints are resolved against.
    pub root: Option<PathBuf>,
}
