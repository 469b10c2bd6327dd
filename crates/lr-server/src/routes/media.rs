//! Range-aware video streaming from the media root.

use std::path::Path;

use axum::response::Response;
use lr_core::media::video_content_type;
use lr_core::paths;

use super::streaming_helpers::serve_file_streaming;

/// Serve the video at `url_path` (still percent-encoded) from `root`.
///
/// The path is resolved and confined to the root before any response is
/// built, so a missing file is always a clean `404`.
pub async fn serve_media(
    root: &Path,
    url_path: &str,
    range_header: Option<&str>,
) -> lr_core::Result<Response> {
    let root_buf = root.to_path_buf();
    let url = url_path.to_owned();
    let resolved = tokio::task::spawn_blocking(move || paths::resolve_media_path(&root_buf, &url))
        .await
        .map_err(|e| lr_core::Error::Internal(format!("path resolution task failed: {e}")))?
        .inspect_err(|e| {
            if matches!(e, lr_core::Error::NotFound { .. }) {
                tracing::info!(
                    requested = %url_path,
                    root = %root.display(),
                    "Media file not found"
                );
            }
        })?;

    tracing::debug!(
        requested = %resolved.decoded,
        path = %resolved.path.display(),
        range = ?range_header,
        "Streaming media file"
    );

    let content_type = video_content_type(&resolved.decoded);
    serve_file_streaming(&resolved.path, content_type, range_header).await
}
