// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for sw-planets-core.
//!
//! Lookup failures come from the movie catalog; store failures wrap them
//! together with the storage-side errors.

use thiserror::Error;

/// Result type using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from the movie-count catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The catalog returned zero or several matches, or a match whose name
    /// differs from the requested one.
    #[error("invalid planet name: {0}")]
    InvalidName(String),

    /// The catalog could not be reached or answered with a failure status.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog answered with a body of unexpected shape.
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// Get the error code string for this error type.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "INVALID_PLANET_NAME",
            Self::Unavailable(_) => "LOOKUP_UNAVAILABLE",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }
}

/// Planet store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Movie-count lookup failed; nothing was written.
    #[error("create planet: {0}")]
    Lookup(#[from] LookupError),

    /// The identifier is not a valid object id.
    #[error("invalid ID: {0}")]
    InvalidId(String),

    /// No planet matched the request.
    #[error("planet does not exist")]
    NotFound,

    /// The insert was rejected or returned no object id.
    #[error("failed to insert record: {0}")]
    InsertFailed(String),

    /// A query against the collection failed.
    #[error("failed to fetch record: {0}")]
    FetchFailed(String),

    /// A stored document could not be decoded into a planet.
    #[error("failed to unmarshal record: {0}")]
    DecodeFailed(String),

    /// The delete was rejected by the database.
    #[error("could not delete item: {0}")]
    DeleteFailed(String),

    /// The database could not be reached.
    #[error("database unavailable: {0}")]
    ConnectFailed(String),
}

impl StoreError {
    /// Get the error code string for this error type.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Lookup(e) => e.error_code(),
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound => "NOT_FOUND",
            Self::InsertFailed(_) => "INSERT_FAILED",
            Self::FetchFailed(_) => "FETCH_FAILED",
            Self::DecodeFailed(_) => "DECODE_FAILED",
            Self::DeleteFailed(_) => "DELETE_FAILED",
            Self::ConnectFailed(_) => "CONNECT_FAILED",
        }
    }
}
