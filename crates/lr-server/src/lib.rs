//! lr-server: HTTP server exposing the media catalog and range-aware video
//! streaming.
//!
//! This crate ties the catalog builder and the path/media helpers from
//! lr-core into a running server. It provides:
//!
//! - `GET /files.json`, the movie/series catalog of the media root
//! - byte-range streaming for any path ending in a video extension
//! - a static-file fallback for everything else
//! - CORS headers on every response and graceful shutdown via signals

pub mod context;
pub mod error;
pub mod lan;
pub mod router;
pub mod routes;

use std::net::SocketAddr;

use lr_core::config::Config;

use crate::context::AppContext;

/// Start the lanreel server.
///
/// Resolves the media root and static directory, binds the listener, logs
/// the loopback and LAN addresses, and serves until a shutdown signal is
/// received.
pub async fn start(config: Config) -> lr_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let media_root = config.resolve_media_root()?;
    let static_dir = config.resolve_static_dir()?;
    tracing::info!("Serving media from {}", media_root.display());
    tracing::info!("Serving static files from {}", static_dir.display());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| lr_core::Error::Validation(format!("Invalid server address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| bind_error(addr, e))?;
    let port = listener.local_addr()?.port();

    let ctx = AppContext::new(media_root, static_dir);
    let app = router::build_router(ctx);

    lan::log_access_urls(port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Turn a bind failure into an error carrying remediation steps.
fn bind_error(addr: SocketAddr, err: std::io::Error) -> lr_core::Error {
    if err.kind() == std::io::ErrorKind::AddrInUse {
        let port = addr.port();
        lr_core::Error::Internal(format!(
            "Port {port} is already in use. Try one of these:\n  \
             1. Pick another port with --port\n  \
             2. Stop the process holding it (lsof -i :{port}, or netstat -ano | findstr :{port} on Windows)\n  \
             3. Wait a few minutes for the port to be released"
        ))
    } else {
        lr_core::Error::Internal(format!("Failed to bind to {addr}: {err}"))
    }
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
