// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Planet domain types.

use serde::{Deserialize, Serialize};

/// A persisted planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Object id assigned on insert, as 24 hex characters.
    pub id: String,
    /// Planet name, matched exactly against the movie catalog.
    pub name: String,
    /// Terrain description.
    pub terrain: String,
    /// Climate description.
    pub climate: String,
    /// Number of films the planet appeared in, fixed at creation.
    pub movie_count: u32,
}

/// Arguments for creating a planet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreatePlanet {
    /// Planet name.
    pub name: String,
    /// Terrain description.
    pub terrain: String,
    /// Climate description.
    pub climate: String,
}

/// Arguments for listing planets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPlanets {
    /// Exact name filter. Blank means no filter.
    pub name: String,
}

impl ListPlanets {
    /// Filter with surrounding whitespace removed, or `None` when blank.
    pub fn name_filter(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
