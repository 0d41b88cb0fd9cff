// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SW Planets Server
//!
//! Connects to MongoDB, verifies the connection and serves the planet API
//! until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use sw_planets_core::catalog::SwapiCatalog;
use sw_planets_core::store::{MongoPlanetStore, PlanetStore};
use sw_planets_server::config::Config;
use sw_planets_server::handlers::AppState;
use sw_planets_server::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sw_planets_server=info,sw_planets_core=info,tower_http=info".into()
            }),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    info!(
        http_addr = %config.http_addr,
        database = %config.database,
        collection = %config.collection,
        catalog_url = %config.catalog_url,
        "Configuration loaded"
    );

    let catalog = Arc::new(SwapiCatalog::new(&config.catalog_url));

    info!("Connecting to MongoDB...");
    let store = MongoPlanetStore::connect(
        &config.mongodb_uri,
        &config.database,
        &config.collection,
        config.connect_timeout,
        catalog,
    )
    .await?;

    store.ping().await?;
    info!("Database health check passed");

    let state = Arc::new(AppState::new(Arc::new(store)));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received");
    };

    server::run_server(config.http_addr, state, shutdown).await?;

    info!("SW Planets server shut down");
    Ok(())
}
