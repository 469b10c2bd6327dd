//! Shared streaming helpers: range parsing and chunked file serving via
//! `ReaderStream`.

use std::path::Path;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

/// Read size for streamed bodies.
const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// An inclusive byte span of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: u64,
    pub end: u64,
}

impl RangeSpec {
    /// Number of bytes covered by the span.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    fn full(file_size: u64) -> Self {
        Self {
            start: 0,
            end: file_size - 1,
        }
    }
}

/// Parse a `Range: bytes=START-END` header value for a non-empty file.
///
/// Parsing is lenient: an empty start means 0, an empty or missing end
/// means the last byte, and an end past the file is clamped. Anything that
/// does not parse, or a start beyond the end, falls back to the whole file.
pub fn parse_range_header(value: &str, file_size: u64) -> RangeSpec {
    debug_assert!(file_size > 0);
    let last = file_size - 1;

    let spec = value.trim();
    let spec = spec.strip_prefix("bytes=").unwrap_or(spec);
    let mut parts = spec.split('-');
    let start_str = parts.next().unwrap_or("").trim();
    let end_str = parts.next().map(str::trim).unwrap_or("");

    let start = if start_str.is_empty() {
        Some(0)
    } else {
        start_str.parse::<u64>().ok()
    };
    let end = if end_str.is_empty() {
        Some(last)
    } else {
        end_str.parse::<u64>().ok()
    };

    match (start, end) {
        (Some(start), Some(end)) => {
            let end = end.min(last);
            if start > end {
                RangeSpec::full(file_size)
            } else {
                RangeSpec { start, end }
            }
        }
        _ => RangeSpec::full(file_size),
    }
}

/// Serve a file using chunked streaming via `ReaderStream`.
///
/// Without a range header (or for an empty file) the whole file is sent
/// with `200`; otherwise the requested span is sent with `206` and a
/// `Content-Range`. `Content-Disposition` is never set so players stream the
/// body inline.
pub async fn serve_file_streaming(
    file_path: &Path,
    content_type: &'static str,
    range_header: Option<&str>,
) -> lr_core::Result<Response> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .map_err(|e| lr_core::Error::from_io(e, file_path.display()))?;
    let file_size = file
        .metadata()
        .await
        .map_err(|e| lr_core::Error::from_io(e, file_path.display()))?
        .len();

    let range = match range_header {
        Some(value) if file_size > 0 => Some(parse_range_header(value, file_size)),
        _ => None,
    };

    match range {
        Some(range) => {
            let length = range.len();
            file.seek(std::io::SeekFrom::Start(range.start)).await?;

            tracing::debug!(
                path = %file_path.display(),
                start = range.start,
                end = range.end,
                file_size,
                "Serving partial content"
            );

            // Wrap in a Take to limit reads to exactly `length` bytes.
            let limited = file.take(length);
            let stream = ReaderStream::with_capacity(limited, STREAM_CHUNK_SIZE);
            let body = Body::from_stream(stream);

            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                    (
                        header::CONTENT_RANGE,
                        format!("bytes {}-{}/{file_size}", range.start, range.end),
                    ),
                    (header::CONTENT_LENGTH, length.to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                body,
            )
                .into_response())
        }
        None => {
            tracing::debug!(path = %file_path.display(), file_size, "Serving full content");

            let limited = file.take(file_size);
            let stream = ReaderStream::with_capacity(limited, STREAM_CHUNK_SIZE);
            let body = Body::from_stream(stream);

            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                    (header::CONTENT_LENGTH, file_size.to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                body,
            )
                .into_response())
        }
    }
}
