// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP router and server loop.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{self, AppState};

/// Build the API router.
///
/// | Method | Path | Handler |
/// |--------|------|---------|
/// | POST | `/planets` | create |
/// | GET | `/planets` | list, optional `name` filter |
/// | GET | `/planets/{id}` | get |
/// | DELETE | `/planets/{id}` | delete |
/// | GET | `/health` | health probe |
///
/// Unknown paths answer 404 and unsupported methods 405, both with a JSON
/// error body.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/planets",
            get(handlers::list_planets).post(handlers::create_planet),
        )
        .route(
            "/planets/{id}",
            get(handlers::get_planet).delete(handlers::delete_planet),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `addr` until `shutdown` resolves.
pub async fn run_server<F>(
    addr: SocketAddr,
    state: Arc<AppState>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
