// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SW Planets Core - Planet Store and Movie Catalog
//!
//! This crate holds everything below the HTTP layer: the planet model, the
//! store abstraction with its MongoDB and in-memory backends, and the lookup
//! that counts a planet's film appearances in the Star Wars catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │          sw-planets-server         │
//! │       (axum router, handlers)      │
//! └────────────────────────────────────┘
//!                   │ PlanetStore
//!                   ▼
//! ┌────────────────────────────────────┐  create only  ┌──────────────────────┐
//! │     MongoPlanetStore (This Crate)  │──────────────►│ MovieCatalog (SWAPI) │
//! └────────────────────────────────────┘               └──────────────────────┘
//!                   │
//!                   ▼
//! ┌────────────────────────────────────┐
//! │     MongoDB (star-wars.planets)    │
//! └────────────────────────────────────┘
//! ```
//!
//! # Store Operations
//!
//! | Operation | Errors |
//! |-----------|--------|
//! | `create` | `Lookup`, `InsertFailed` |
//! | `get` | `InvalidId`, `NotFound`, `FetchFailed`, `DecodeFailed` |
//! | `list` | `NotFound` (empty result), `FetchFailed`, `DecodeFailed` |
//! | `delete` | `InvalidId`, `DeleteFailed` |
//!
//! A create resolves the movie count first and writes nothing if the lookup
//! fails. Movie counts are never recomputed after creation.
//!
//! # Modules
//!
//! - [`catalog`]: Movie-count lookup (SWAPI client and a static table)
//! - [`error`]: Lookup and store error types
//! - [`model`]: Planet and operation argument types
//! - [`store`]: Store trait with MongoDB and in-memory backends

#![deny(missing_docs)]

/// Movie-count lookup against the Star Wars catalog.
pub mod catalog;

/// Error types for lookups and store operations.
pub mod error;

/// Planet domain types.
pub mod model;

/// Planet store trait and backends.
pub mod store;

pub use catalog::{MovieCatalog, StaticCatalog, SwapiCatalog};
pub use error::{LookupError, StoreError};
pub use model::{CreatePlanet, ListPlanets, Planet};
pub use store::{MemoryPlanetStore, MongoPlanetStore, PlanetStore};
