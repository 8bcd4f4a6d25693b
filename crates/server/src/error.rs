// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping of request failures to HTTP responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Errors returned by request handlers.
///
/// Every variant renders as a `text/plain` body carrying the diagnostic.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(jot_core::Error),

    #[error("Error fetching Jots: {0}")]
    Fetch(jot_core::Error),

    #[error("Database connection error: {0}")]
    Connect(jot_core::Error),

    #[error("Error creating Jot: {0}")]
    Create(jot_core::Error),

    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, "{}", self);
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
