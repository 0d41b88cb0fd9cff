// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SW Planets Server - HTTP API for Star Wars Planets
//!
//! Exposes planet resources over JSON/HTTP. Planets live in MongoDB and are
//! enriched at creation with the number of films they appeared in, looked up
//! in the public Star Wars API.
//!
//! # Endpoints
//!
//! | Method | Path | Success | Description |
//! |--------|------|---------|-------------|
//! | `POST` | `/planets` | 201 | Create from `{name, terrain, climate}` |
//! | `GET` | `/planets/{id}` | 200 | Fetch one planet; `id` must be alphanumeric |
//! | `DELETE` | `/planets/{id}` | 200 | Delete one planet; `id` must be alphanumeric |
//! | `GET` | `/planets?name=` | 200 | List all, or filter by exact alphanumeric name |
//! | `GET` | `/health` | 200 / 503 | Database reachability, version and uptime |
//!
//! Planets are returned as `{id, name, terrain, climate, movie_count}`.
//! Errors are returned as `{"error": <message>}`:
//!
//! | Failure | Status |
//! |---------|--------|
//! | Validation, malformed id | 400 |
//! | No matching planet (including an empty list), unknown path | 404 |
//! | Unsupported method on a known path | 405 |
//! | Catalog lookup, database errors | 500 |
//!
//! # Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SW_PLANETS_MONGODB_URI` | `mongodb://localhost:27017` | MongoDB connection string |
//! | `SW_PLANETS_DATABASE` | `star-wars` | Database name |
//! | `SW_PLANETS_COLLECTION` | `planets` | Collection name |
//! | `SW_PLANETS_HTTP_PORT` | `8080` | HTTP listen port |
//! | `SW_PLANETS_CATALOG_URL` | `https://swapi.dev/api` | Star Wars catalog base URL |
//! | `SW_PLANETS_CONNECT_TIMEOUT_SECS` | `10` | MongoDB connect timeout |
//!
//! # Modules
//!
//! - [`config`]: Server configuration from environment variables
//! - [`error`]: API error type and status mapping
//! - [`handlers`]: Request handlers and shared state
//! - [`models`]: Request/response bodies and input validation
//! - [`server`]: Router and server loop

#![deny(missing_docs)]

/// Server configuration loaded from environment variables.
pub mod config;

/// API error type and status mapping.
pub mod error;

/// Request handlers and shared state.
pub mod handlers;

/// Request/response bodies and input validation.
pub mod models;

/// Router and server loop.
pub mod server;

pub use config::Config;
pub use error::ApiError;
