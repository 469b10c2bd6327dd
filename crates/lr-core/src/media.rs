//! Media-type classification by file extension.
//!
//! [`MediaType`] serializes in lowercase (via `serde(rename_all = "lowercase")`)
//! and implements `Display` manually for consistent string representation.
//! All extension checks are case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Extensions listed as video in the catalog.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v"];

/// Extensions listed as images in the catalog.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Extensions listed as audio in the catalog.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg"];

/// Extensions listed as text in the catalog.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "py", "html", "css", "js"];

/// Extensions the range handler streams. `m4v` is listed in the catalog but
/// is served by the static fallback.
const STREAMABLE_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm"];

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// Coarse media category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Image,
    Audio,
    Text,
    Unknown,
}

impl MediaType {
    /// Classify a bare extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        if VIDEO_EXTENSIONS.contains(&ext) {
            Self::Video
        } else if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            Self::Audio
        } else if TEXT_EXTENSIONS.contains(&ext) {
            Self::Text
        } else {
            Self::Unknown
        }
    }

    /// Classify a path by its extension. Paths without one are `Unknown`.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
            Self::Text => write!(f, "text"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Streaming helpers
// ---------------------------------------------------------------------------

/// Lowercased extension of the last segment of a URL path, if any.
fn url_extension(url_path: &str) -> Option<String> {
    let last = url_path.rsplit('/').next()?;
    let (_, ext) = last.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Whether a request path should be handed to the range handler.
pub fn is_streamable_path(url_path: &str) -> bool {
    url_extension(url_path)
        .map(|ext| STREAMABLE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// MIME type for a streamable video path. Unrecognized extensions fall back
/// to `video/mp4`.
pub fn video_content_type(path: &str) -> &'static str {
    match url_extension(path).as_deref() {
        Some("mp4") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("mov") => "video/quicktime",
        Some("wmv") => "video/x-ms-wmv",
        Some("flv") => "video/x-flv",
        Some("webm") => "video/webm",
        _ => "video/mp4",
    }
}
