// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jot-core operations.

use thiserror::Error;

/// All possible errors that can occur in jot-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("Invalid dateTime format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid dateTime value")]
    ZeroDateTime,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns `true` when the error was caused by caller input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_) | Error::InvalidDateTime(_) | Error::ZeroDateTime
        )
    }
}

/// A specialized Result type for jot-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
