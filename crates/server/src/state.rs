// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-request access to the jot store.
//!
//! SQLite calls block, so each operation runs on the blocking pool with its
//! own connection. Nothing is shared between requests except the store path.

use std::sync::Arc;

use jot_core::{Jot, NewJot, Store};

use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }

    /// Fetch every jot in insertion order.
    pub async fn all_jots(&self) -> Result<Vec<Jot>, ApiError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.list_jots())
            .await?
            .map_err(ApiError::Fetch)
    }

    /// Insert a jot and return its id.
    pub async fn create_jot(&self, jot: NewJot) -> Result<i64, ApiError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            let db = store.open().map_err(ApiError::Connect)?;
            db.insert_jot(&jot).map_err(ApiError::Create)
        })
        .await?
    }
}
