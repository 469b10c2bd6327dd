//! Rules for files that never appear in the catalog.

/// System files some platforms drop into every folder.
const SYSTEM_FILES: &[&str] = &["desktop.ini", "thumbs.db"];

/// Archive and playlist-style extensions excluded from listings.
const ARCHIVE_EXTENSIONS: &[&str] = &["pfl", "zip", "rar", "7z", "tar", "gz"];

/// Whether a file with this name should be left out of the catalog.
pub fn is_excluded(file_name: &str) -> bool {
    if file_name.starts_with('.') {
        return true;
    }

    let lower = file_name.to_lowercase();
    if SYSTEM_FILES.contains(&lower.as_str()) {
        return true;
    }

    match lower.rsplit_once('.') {
        Some((_, ext)) => ARCHIVE_EXTENSIONS.contains(&ext),
        None => false,
    }
}
