// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration loading from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use sw_planets_core::catalog::DEFAULT_CATALOG_URL;
use sw_planets_core::store::mongo::{DEFAULT_COLLECTION, DEFAULT_DATABASE};

/// SW Planets server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the planets collection
    pub database: String,
    /// Collection of planet documents
    pub collection: String,
    /// HTTP listen address
    pub http_addr: SocketAddr,
    /// Base URL of the Star Wars catalog
    pub catalog_url: String,
    /// MongoDB connect and server-selection timeout
    pub connect_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `SW_PLANETS_MONGODB_URI`: MongoDB connection string (default: mongodb://localhost:27017)
    /// - `SW_PLANETS_DATABASE`: database name (default: star-wars)
    /// - `SW_PLANETS_COLLECTION`: collection name (default: planets)
    /// - `SW_PLANETS_HTTP_PORT`: HTTP server port (default: 8080)
    /// - `SW_PLANETS_CATALOG_URL`: catalog base URL (default: https://swapi.dev/api)
    /// - `SW_PLANETS_CONNECT_TIMEOUT_SECS`: MongoDB connect timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongodb_uri = std::env::var("SW_PLANETS_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        if !mongodb_uri.starts_with("mongodb://") && !mongodb_uri.starts_with("mongodb+srv://") {
            return Err(ConfigError::Invalid(
                "SW_PLANETS_MONGODB_URI",
                "must start with mongodb:// or mongodb+srv://",
            ));
        }

        let database = non_empty_var("SW_PLANETS_DATABASE", DEFAULT_DATABASE)?;
        let collection = non_empty_var("SW_PLANETS_COLLECTION", DEFAULT_COLLECTION)?;

        let http_port: u16 = std::env::var("SW_PLANETS_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("SW_PLANETS_HTTP_PORT", "must be a valid port number")
            })?;

        let catalog_url = std::env::var("SW_PLANETS_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        if !catalog_url.starts_with("http://") && !catalog_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "SW_PLANETS_CATALOG_URL",
                "must be an http(s) URL",
            ));
        }

        let connect_timeout_secs: u64 = std::env::var("SW_PLANETS_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::Invalid(
                "SW_PLANETS_CONNECT_TIMEOUT_SECS",
                "must be a positive integer",
            ))?;

        Ok(Self {
            mongodb_uri,
            database,
            collection,
            http_addr: SocketAddr::from(([0, 0, 0, 0], http_port)),
            catalog_url,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

fn non_empty_var(key: &'static str, default: &str) -> Result<String, ConfigError> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(key, "must not be empty"));
    }
    Ok(value)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
