// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! In-memory planet store.
//!
//! Keeps planets in insertion order behind a lock. Intended for tests and
//! local runs; nothing survives a restart.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::MovieCatalog;
use crate::error::{Result, StoreError};
use crate::model::{CreatePlanet, ListPlanets, Planet};

use super::{PlanetStore, parse_object_id};

/// Planet store held in process memory.
pub struct MemoryPlanetStore {
    planets: RwLock<Vec<Planet>>,
    catalog: Arc<dyn MovieCatalog>,
}

impl MemoryPlanetStore {
    /// Create an empty store resolving movie counts through `catalog`.
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            planets: RwLock::new(Vec::new()),
            catalog,
        }
    }

    /// Number of stored planets.
    pub async fn len(&self) -> usize {
        self.planets.read().await.len()
    }

    /// Whether the store holds no planets.
    pub async fn is_empty(&self) -> bool {
        self.planets.read().await.is_empty()
    }
}

#[async_trait]
impl PlanetStore for MemoryPlanetStore {
    async fn create(&self, args: CreatePlanet) -> Result<Planet> {
        let movie_count = self.catalog.movie_count(&args.name).await?;

        let planet = Planet {
            id: ObjectId::new().to_hex(),
            name: args.name,
            terrain: args.terrain,
            climate: args.climate,
            movie_count,
        };

        self.planets.write().await.push(planet.clone());
        debug!(planet_id = %planet.id, name = %planet.name, "Planet created in memory");
        Ok(planet)
    }

    async fn get(&self, id: &str) -> Result<Planet> {
        let oid = parse_object_id(id)?.to_hex();
        self.planets
            .read()
            .await
            .iter()
            .find(|p| p.id == oid)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, args: ListPlanets) -> Result<Vec<Planet>> {
        let filter = args.name_filter();
        let planets: Vec<Planet> = self
            .planets
            .read()
            .await
            .iter()
            .filter(|p| filter.is_none_or(|name| p.name == name))
            .cloned()
            .collect();

        if planets.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(planets)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let oid = parse_object_id(id)?.to_hex();
        self.planets.write().await.retain(|p| p.id != oid);
        Ok(())
    }
}
