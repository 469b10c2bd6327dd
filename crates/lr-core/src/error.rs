//! Unified error type for lanreel.
//!
//! All crates funnel their failures into [`Error`], which carries enough context
//! for route handlers to derive an HTTP status code via [`Error::http_status`].

use std::fmt;

/// Unified error type covering all failure modes in lanreel.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "file", "media root").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// The caller may not access the requested resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request or configuration data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::Forbidden(_) => 403,
            Error::Validation(_) => 400,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Classify an I/O error raised while touching `what`.
    ///
    /// Permission failures become [`Error::Forbidden`] and missing files
    /// become [`Error::NotFound`]; everything else stays an [`Error::Io`].
    pub fn from_io(err: std::io::Error, what: impl fmt::Display) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                Error::Forbidden(format!("permission denied: {what}"))
            }
            std::io::ErrorKind::NotFound => Error::not_found("file", what),
            _ => Error::Io { source: err },
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
