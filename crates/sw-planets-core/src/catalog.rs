// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Movie-count lookup against the Star Wars catalog.
//!
//! A planet name resolves only when the catalog search returns exactly one
//! result whose name is byte-for-byte equal to the requested name.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::LookupError;

/// Default catalog base URL.
pub const DEFAULT_CATALOG_URL: &str = "https://swapi.dev/api";

/// Source of film-appearance counts for planets.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Number of films the planet named `name` appeared in.
    async fn movie_count(&self, name: &str) -> Result<u32, LookupError>;
}

/// Body of `GET /planets/?search=`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    count: u64,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    #[serde(default)]
    films: Vec<String>,
}

/// Resolve a search response to a film count for `name`.
fn resolve(name: &str, response: SearchResponse) -> Result<u32, LookupError> {
    if response.count != 1 {
        return Err(LookupError::InvalidName(name.to_string()));
    }
    let Some(result) = response.results.into_iter().next() else {
        return Err(LookupError::MalformedResponse(
            "count is 1 but results are empty".to_string(),
        ));
    };
    if result.name != name {
        return Err(LookupError::InvalidName(name.to_string()));
    }
    film_count(result.films.len())
}

fn film_count(films: usize) -> Result<u32, LookupError> {
    u32::try_from(films)
        .map_err(|_| LookupError::MalformedResponse(format!("film count {} out of range", films)))
}

/// Catalog backed by the public SWAPI HTTP service.
#[derive(Debug, Clone)]
pub struct SwapiCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiCatalog {
    /// Create a catalog client for the given base URL (e.g. `https://swapi.dev/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a catalog client reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SwapiCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl MovieCatalog for SwapiCatalog {
    async fn movie_count(&self, name: &str) -> Result<u32, LookupError> {
        let url = format!("{}/planets/", self.base_url);
        debug!(%url, name, "Searching catalog");

        let response = self
            .client
            .get(&url)
            .query(&[("search", name)])
            .send()
            .await
            .map_err(|e| {
                warn!(name, error = %e, "Catalog request failed");
                LookupError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(name, %status, "Catalog returned failure status");
            return Err(LookupError::Unavailable(format!("catalog returned {}", status)));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        let count = resolve(name, body)?;
        debug!(name, movie_count = count, "Catalog lookup resolved");
        Ok(count)
    }
}

/// Catalog answering from a fixed in-process table.
///
/// Used by tests and local runs without network access. Names absent from
/// the table are treated as unknown planets.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    films: HashMap<String, u32>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a planet with its film count.
    pub fn with_planet(mut self, name: impl Into<String>, movie_count: u32) -> Self {
        self.films.insert(name.into(), movie_count);
        self
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            films: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[async_trait]
impl MovieCatalog for StaticCatalog {
    async fn movie_count(&self, name: &str) -> Result<u32, LookupError> {
        self.films
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::InvalidName(name.to_string()))
    }
}
