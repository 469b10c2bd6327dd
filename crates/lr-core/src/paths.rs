//! Mapping request paths onto files under the media root.
//!
//! A URL path is decoded once and joined segment by segment onto the root.
//! Confinement is lexical: `..` and absolute components are rejected before
//! the filesystem is touched. Symlinks inside the root are followed, the
//! same way the catalog walk follows them, so every listed file resolves.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A request path that has been mapped onto the media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The percent-decoded request path, as echoed in error messages.
    pub decoded: String,
    /// Filesystem location under the media root.
    pub path: PathBuf,
}

/// Decode `url_path` and join it onto `root` without touching the disk.
///
/// Invalid UTF-8 after decoding is replaced with U+FFFD. Empty and `.`
/// segments are ignored. Any segment that would leave the root (`..`, a
/// drive prefix, an absolute component) is rejected with [`Error::Forbidden`].
pub fn join_url_path(root: &Path, url_path: &str) -> Result<ResolvedPath> {
    let bytes = urlencoding::decode_binary(url_path.as_bytes());
    let decoded = String::from_utf8_lossy(&bytes).into_owned();

    let mut path = root.to_path_buf();
    for segment in decoded.trim_start_matches('/').split('/') {
        for component in Path::new(segment).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::Forbidden(format!(
                        "path escapes media root: {decoded}"
                    )));
                }
            }
        }
    }

    Ok(ResolvedPath { decoded, path })
}

/// Resolve `url_path` to an existing regular file under `root`.
///
/// Missing paths, directories and names the filesystem cannot represent
/// (such as an embedded NUL) yield [`Error::NotFound`] naming the decoded
/// request path.
pub fn resolve_media_path(root: &Path, url_path: &str) -> Result<ResolvedPath> {
    let resolved = join_url_path(root, url_path)?;

    let metadata = std::fs::metadata(&resolved.path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidInput => Error::not_found("file", &resolved.decoded),
        _ => Error::from_io(e, &resolved.decoded),
    })?;
    if !metadata.is_file() {
        return Err(Error::not_found("file", &resolved.decoded));
    }

    Ok(resolved)
}
