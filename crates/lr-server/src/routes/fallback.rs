//! Dispatch for every path without a dedicated route.
//!
//! Video paths go to the range handler against the media root; everything
//! else is served as a static file from the static directory.

use axum::extract::{Request, State};
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use lr_core::media::is_streamable_path;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::context::AppContext;
use crate::error::AppError;

use super::media::serve_media;

pub async fn dispatch(State(ctx): State<AppContext>, request: Request) -> Response {
    let path = request.uri().path().to_owned();
    tracing::debug!(method = %request.method(), path = %path, "Received request");

    let is_read = matches!(*request.method(), Method::GET | Method::HEAD);
    if is_read && is_streamable_path(&path) {
        let range = request
            .headers()
            .get(header::RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        return match serve_media(ctx.media_root(), &path, range.as_deref()).await {
            Ok(response) => response,
            Err(e) => AppError::from(e).into_response(),
        };
    }

    match ServeDir::new(ctx.static_dir()).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
