//! HTTP server setup.
//!
//! This module provides the router and listener helpers used by both
//! the binary and integration tests.

use axum::{routing::any, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ServerError;

/// Build the router.
///
/// `/` answers every method, and the same handler is the fallback so any
/// other path gets the same response.
pub fn build_router() -> Router {
    Router::new()
        .route("/", any(api::handle_whoami))
        .fallback(api::handle_whoami)
        .layer(TraceLayer::new_for_http())
}

/// Bind a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the router on `listener` until it fails.
///
/// The peer socket address of every connection is made available to the
/// handler through `ConnectInfo`.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let app = build_router();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
