// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Planet API handlers.
//!
//! Each handler validates its input, calls the store once and maps the
//! result to a response. Validation failures never reach the store.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use sw_planets_core::store::PlanetStore;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{
    CreatePlanetRequest, HealthResponse, ListPlanetsQuery, PlanetResponse, validate_id,
};

/// Shared state for API handlers.
pub struct AppState {
    /// Planet store backing every endpoint.
    pub store: Arc<dyn PlanetStore>,
    /// When the server started (for uptime calculation).
    pub start_time: Instant,
    /// Server version string.
    pub version: String,
}

impl AppState {
    /// Create handler state over a store.
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get the server uptime in milliseconds.
    pub fn uptime_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

// ============================================================================
// Health Check
// ============================================================================

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Health check ping failed");
            false
        }
    };

    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            database,
            version: state.version.clone(),
            uptime_ms: state.uptime_ms(),
        }),
    )
}

// ============================================================================
// Planets
// ============================================================================

/// `POST /planets`
pub async fn create_planet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlanetResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let args = request.validate()?;

    info!(name = %args.name, "Create planet request received");
    let planet = state.store.create(args).await?;

    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// `GET /planets/{id}`
pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlanetResponse>, ApiError> {
    validate_id(&id)?;

    let planet = state.store.get(&id).await?;
    Ok(Json(planet.into()))
}

/// `DELETE /planets/{id}`
pub async fn delete_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<String>, ApiError> {
    validate_id(&id)?;

    state.store.delete(&id).await?;
    Ok(Json(format!("planet with id {} deleted", id)))
}

/// `GET /planets?name=`
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListPlanetsQuery>, QueryRejection>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let args = query.validate()?;

    let planets = state.store.list(args).await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Unmatched path.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// Matched path with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
