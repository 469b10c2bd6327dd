//! Axum router construction.
//!
//! Builds the application router: the catalog route, the media/static
//! fallback, CORS on every response, and request tracing.

use axum::http::{HeaderName, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::routes;

/// Well-known path of the catalog endpoint.
pub const CATALOG_PATH: &str = "/files.json";

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("x-requested-with")]);

    Router::new()
        .route(CATALOG_PATH, get(routes::catalog::files_json))
        .fallback(routes::fallback::dispatch)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
