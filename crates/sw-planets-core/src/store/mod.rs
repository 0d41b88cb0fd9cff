// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Planet store interface and backends.
//!
//! Handlers only see [`PlanetStore`]. [`MongoPlanetStore`] is the production
//! backend; [`MemoryPlanetStore`] keeps planets in process and follows the
//! same contract, including object-id parsing and the empty-list policy.

pub mod memory;
pub mod mongo;

pub use self::memory::MemoryPlanetStore;
pub use self::mongo::MongoPlanetStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::{Result, StoreError};
use crate::model::{CreatePlanet, ListPlanets, Planet};

/// Persistence operations for planets.
///
/// Dropping a returned future cancels the underlying storage or catalog call.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Look up the movie count for `args.name`, then insert the planet.
    ///
    /// Nothing is written when the lookup fails.
    async fn create(&self, args: CreatePlanet) -> Result<Planet>;

    /// Fetch a planet by object id.
    async fn get(&self, id: &str) -> Result<Planet>;

    /// List all planets, or those whose name equals the trimmed filter.
    ///
    /// An empty result is reported as [`StoreError::NotFound`].
    async fn list(&self, args: ListPlanets) -> Result<Vec<Planet>>;

    /// Delete a planet by object id.
    ///
    /// Succeeds whether or not a planet was removed.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Parse a 24-hex-character object id.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
