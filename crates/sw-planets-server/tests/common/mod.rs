// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for sw-planets-server API tests.
//!
//! Provides a router over the in-memory store and a scripted store that
//! records how often it was called.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sw_planets_core::catalog::StaticCatalog;
use sw_planets_core::error::{Result, StoreError};
use sw_planets_core::model::{CreatePlanet, ListPlanets, Planet};
use sw_planets_core::store::{MemoryPlanetStore, PlanetStore};
use sw_planets_server::handlers::AppState;
use sw_planets_server::server::router;

/// Catalog entries with their film counts.
pub const KNOWN_PLANETS: [(&str, u32); 5] = [
    ("Tatooine", 5),
    ("Kamino", 1),
    ("Stewjon", 0),
    ("Utapau", 1),
    ("Alderaan", 2),
];

/// Router over an empty in-memory store, plus a handle on the store.
pub fn memory_app() -> (Router, Arc<MemoryPlanetStore>) {
    let catalog: StaticCatalog = KNOWN_PLANETS.into_iter().collect();
    let store = Arc::new(MemoryPlanetStore::new(Arc::new(catalog)));
    let app = router(Arc::new(AppState::new(store.clone())));
    (app, store)
}

/// Router over a scripted store.
pub fn scripted_app(store: Arc<ScriptedStore>) -> Router {
    router(Arc::new(AppState::new(store)))
}

/// Send a request and return the status with the parsed JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

/// Send a prepared request and return the status with the parsed JSON body.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// A fixed planet for scripted responses.
pub fn sample_planet() -> Planet {
    Planet {
        id: "62a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        name: "Tatooine".to_string(),
        terrain: "desert".to_string(),
        climate: "arid".to_string(),
        movie_count: 5,
    }
}

/// Store double that answers every call with a preset outcome.
pub struct ScriptedStore {
    outcome: std::result::Result<Planet, StoreError>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    /// Store whose every operation succeeds with `planet`.
    pub fn ok(planet: Planet) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(planet),
            calls: AtomicUsize::new(0),
        })
    }

    /// Store whose every operation fails with `error`.
    pub fn failing(error: StoreError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of store operations invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<Planet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[async_trait]
impl PlanetStore for ScriptedStore {
    async fn create(&self, _args: CreatePlanet) -> Result<Planet> {
        self.answer()
    }

    async fn get(&self, _id: &str) -> Result<Planet> {
        self.answer()
    }

    async fn list(&self, _args: ListPlanets) -> Result<Vec<Planet>> {
        self.answer().map(|p| vec![p])
    }

    async fn delete(&self, _id: &str) -> Result<()> {
        self.answer().map(|_| ())
    }

    async fn ping(&self) -> Result<()> {
        self.outcome.clone().map(|_| ())
    }
}
