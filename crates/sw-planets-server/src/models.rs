// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request and response bodies, and the validation applied before the store
//! is called.

use serde::{Deserialize, Serialize};
use sw_planets_core::model::{CreatePlanet, ListPlanets, Planet};

use crate::error::ApiError;

/// True when `value` is non-empty and only ASCII letters and digits.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate a planet id taken from the path.
pub fn validate_id(id: &str) -> Result<(), ApiError> {
    if is_alphanumeric(id) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "id must be alphanumeric, got {:?}",
            id
        )))
    }
}

/// Body of `POST /planets`.
///
/// Missing fields deserialize as empty and are rejected by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanetRequest {
    /// Planet name.
    #[serde(default)]
    pub name: String,
    /// Terrain description.
    #[serde(default)]
    pub terrain: String,
    /// Climate description.
    #[serde(default)]
    pub climate: String,
}

impl CreatePlanetRequest {
    /// Check required fields and convert to store arguments.
    pub fn validate(self) -> Result<CreatePlanet, ApiError> {
        for (field, value) in [
            ("name", &self.name),
            ("terrain", &self.terrain),
            ("climate", &self.climate),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!("{} is required", field)));
            }
        }

        Ok(CreatePlanet {
            name: self.name,
            terrain: self.terrain,
            climate: self.climate,
        })
    }
}

/// Query string of `GET /planets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPlanetsQuery {
    /// Optional exact name filter.
    pub name: Option<String>,
}

impl ListPlanetsQuery {
    /// Check the filter and convert to store arguments.
    ///
    /// Surrounding whitespace is ignored; a blank filter lists every planet.
    pub fn validate(self) -> Result<ListPlanets, ApiError> {
        let name = self.name.unwrap_or_default().trim().to_string();
        if !name.is_empty() && !is_alphanumeric(&name) {
            return Err(ApiError::Validation(format!(
                "name must be alphanumeric, got {:?}",
                name
            )));
        }
        Ok(ListPlanets { name })
    }
}

/// Planet as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetResponse {
    /// Object id.
    pub id: String,
    /// Planet name.
    pub name: String,
    /// Terrain description.
    pub terrain: String,
    /// Climate description.
    pub climate: String,
    /// Number of films the planet appeared in.
    pub movie_count: u32,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            terrain: planet.terrain,
            climate: planet.climate,
            movie_count: planet.movie_count,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: String,
    /// Whether the database answered a ping.
    pub database: bool,
    /// Server version.
    pub version: String,
    /// Server uptime in milliseconds.
    pub uptime_ms: u64,
}
