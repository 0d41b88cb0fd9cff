// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! MongoDB-backed planet store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::MovieCatalog;
use crate::error::{Result, StoreError};
use crate::model::{CreatePlanet, ListPlanets, Planet};

use super::{PlanetStore, parse_object_id};

/// Default database name.
pub const DEFAULT_DATABASE: &str = "star-wars";

/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "planets";

/// Planet as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDocument {
    /// Object id, absent until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Planet name.
    pub name: String,
    /// Terrain description.
    pub terrain: String,
    /// Climate description.
    pub climate: String,
    /// Film count at creation time.
    pub movie_count: i64,
}

impl TryFrom<PlanetDocument> for Planet {
    type Error = StoreError;

    fn try_from(document: PlanetDocument) -> Result<Self> {
        let id = document
            .id
            .ok_or_else(|| StoreError::DecodeFailed("document has no _id".to_string()))?;
        let movie_count = u32::try_from(document.movie_count).map_err(|_| {
            StoreError::DecodeFailed(format!(
                "movie_count {} out of range for planet {}",
                document.movie_count, id
            ))
        })?;

        Ok(Planet {
            id: id.to_hex(),
            name: document.name,
            terrain: document.terrain,
            climate: document.climate,
            movie_count,
        })
    }
}

/// Classify a driver error raised while reading documents.
fn read_error(err: mongodb::error::Error) -> StoreError {
    match *err.kind {
        ErrorKind::BsonDeserialization(_) => StoreError::DecodeFailed(err.to_string()),
        _ => StoreError::FetchFailed(err.to_string()),
    }
}

/// Planet store over a MongoDB collection.
#[derive(Clone)]
pub struct MongoPlanetStore {
    database: Database,
    collection: Collection<PlanetDocument>,
    catalog: Arc<dyn MovieCatalog>,
}

impl MongoPlanetStore {
    /// Create a store over `collection` in an already connected database.
    pub fn new(database: Database, collection: &str, catalog: Arc<dyn MovieCatalog>) -> Self {
        let collection = database.collection::<PlanetDocument>(collection);
        Self {
            database,
            collection,
            catalog,
        }
    }

    /// Connect to MongoDB and create a store.
    ///
    /// `timeout` bounds both the initial connection and server selection.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
        catalog: Arc<dyn MovieCatalog>,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StoreError::ConnectFailed(e.to_string()))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some("sw-planets".to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::ConnectFailed(e.to_string()))?;

        info!(database, collection, "MongoDB client created");
        Ok(Self::new(client.database(database), collection, catalog))
    }

    /// The underlying collection.
    pub fn collection(&self) -> &Collection<PlanetDocument> {
        &self.collection
    }
}

#[async_trait]
impl PlanetStore for MongoPlanetStore {
    async fn create(&self, args: CreatePlanet) -> Result<Planet> {
        let movie_count = self.catalog.movie_count(&args.name).await?;

        let document = PlanetDocument {
            id: None,
            name: args.name,
            terrain: args.terrain,
            climate: args.climate,
            movie_count: i64::from(movie_count),
        };

        let inserted = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                warn!(name = %document.name, error = %e, "Planet insert failed");
                StoreError::InsertFailed(e.to_string())
            })?;

        let id = inserted.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::InsertFailed(format!(
                "inserted id is not an object id: {}",
                inserted.inserted_id
            ))
        })?;

        info!(planet_id = %id, name = %document.name, movie_count, "Planet created");

        Ok(Planet {
            id: id.to_hex(),
            name: document.name,
            terrain: document.terrain,
            climate: document.climate,
            movie_count,
        })
    }

    async fn get(&self, id: &str) -> Result<Planet> {
        let oid = parse_object_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(read_error)?
            .ok_or(StoreError::NotFound)?;

        debug!(planet_id = id, "Planet fetched");
        Planet::try_from(document)
    }

    async fn list(&self, args: ListPlanets) -> Result<Vec<Planet>> {
        // TODO: page through results once the list endpoint takes page_id/page_size
        let filter = match args.name_filter() {
            Some(name) => doc! { "name": name },
            None => Document::new(),
        };

        let documents: Vec<PlanetDocument> = self
            .collection
            .find(filter)
            .await
            .map_err(read_error)?
            .try_collect()
            .await
            .map_err(read_error)?;

        if documents.is_empty() {
            return Err(StoreError::NotFound);
        }

        debug!(count = documents.len(), filter = ?args.name_filter(), "Planets listed");
        documents.into_iter().map(Planet::try_from).collect()
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let oid = parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::DeleteFailed(e.to_string()))?;

        info!(planet_id = id, deleted = result.deleted_count, "Planet delete processed");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| StoreError::ConnectFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_to_planet() {
        let oid = ObjectId::new();
        let planet = Planet::try_from(PlanetDocument {
            id: Some(oid),
            name: "Kamino".to_string(),
            terrain: "ocean".to_string(),
            climate: "temperate".to_string(),
            movie_count: 1,
        })
        .unwrap();

        assert_eq!(planet.id, oid.to_hex());
        assert_eq!(planet.name, "Kamino");
        assert_eq!(planet.movie_count, 1);
    }

    #[test]
    fn test_document_without_id_fails_to_decode() {
        let result = Planet::try_from(PlanetDocument {
            id: None,
            name: "Kamino".to_string(),
            terrain: "ocean".to_string(),
            climate: "temperate".to_string(),
            movie_count: 1,
        });
        assert!(matches!(result, Err(StoreError::DecodeFailed(_))));
    }

    #[test]
    fn test_document_negative_movie_count_fails_to_decode() {
        let result = Planet::try_from(PlanetDocument {
            id: Some(ObjectId::new()),
            name: "Kamino".to_string(),
            terrain: "ocean".to_string(),
            climate: "temperate".to_string(),
            movie_count: -1,
        });
        assert!(matches!(result, Err(StoreError::DecodeFailed(_))));
    }

    #[test]
    fn test_new_document_omits_id() {
        let document = PlanetDocument {
            id: None,
            name: "Utapau".to_string(),
            terrain: "sinkholes".to_string(),
            climate: "arid".to_string(),
            movie_count: 1,
        };
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "Utapau");
        assert_eq!(bson.get_i64("movie_count").unwrap(), 1);
    }
}
