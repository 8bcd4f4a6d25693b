// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! Three routes over plain query strings:
//! - `GET /` lists jots as text
//! - `GET /all` returns them as a JSON array
//! - `GET /new` creates one from `name`, `description` and optional `dateTime`
//!
//! Anything else gets the router's default 404 (or 405 for other methods).

use std::net::SocketAddr;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{debug, info};

use jot_core::{render_listing, Jot, NewJot};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by `/new`.
///
/// Repeated keys are allowed; the first value of each wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct NewJotParams {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) date_time: Option<String>,
}

impl NewJotParams {
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = NewJotParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut params.name,
                "description" => &mut params.description,
                "dateTime" => &mut params.date_time,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/all", get(all))
        .route("/new", get(new_jot))
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind the given address and serve until Ctrl-C.
pub async fn run(addr: SocketAddr, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?);
    info!("jot is ready");

    serve(listener, state, shutdown_signal()).await?;
    info!("jot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    } else {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}

async fn index(State(state): State<AppState>) -> Result<String, ApiError> {
    let jots = state.all_jots().await?;
    debug!("Listing {} jots", jots.len());
    Ok(render_listing(&jots))
}

async fn all(State(state): State<AppState>) -> Result<Json<Vec<Jot>>, ApiError> {
    let jots = state.all_jots().await?;
    debug!("Returning {} jots as JSON", jots.len());
    Ok(Json(jots))
}

async fn new_jot(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let params = NewJotParams::from_pairs(pairs);
    let jot = NewJot::from_params(
        params.name.as_deref(),
        params.description.as_deref(),
        params.date_time.as_deref(),
    )
    .map_err(ApiError::Rejected)?;

    let name = jot.name.clone();
    let id = state.create_jot(jot).await?;
    info!(id, "Created Jot: {}", name);
    Ok(format!("Created Jot: {name}"))
}
