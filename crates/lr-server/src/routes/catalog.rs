//! Catalog route handler.

use axum::extract::State;
use axum::Json;
use lr_catalog::Catalog;

use crate::context::AppContext;
use crate::error::AppError;

/// GET /files.json
///
/// Walks the media root afresh on every request. The walk is blocking
/// filesystem work, so it runs on the blocking pool.
pub async fn files_json(State(ctx): State<AppContext>) -> Result<Json<Catalog>, AppError> {
    let root = ctx.media_root.clone();
    let catalog = tokio::task::spawn_blocking(move || lr_catalog::build_catalog(&root))
        .await
        .map_err(|e| lr_core::Error::Internal(format!("catalog task failed: {e}")))?;

    tracing::info!(
        movies = catalog.movies.len(),
        series = catalog.series.len(),
        "Returning catalog"
    );
    Ok(Json(catalog))
}
