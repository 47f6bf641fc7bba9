// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process entry points for the leaf and aggregator services
//!
//! Bind or serve failures are logged and returned; the binaries propagate
//! them out of `main`, which terminates the process with a non-zero status.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::api::{self, AppState};
use crate::config::{AggregatorConfig, LeafConfig};
use crate::error::Result;

/// Runs a leaf service until its listener fails
///
/// # Errors
///
/// Returns an error if the address cannot be parsed or bound, or if serving fails.
pub async fn run_leaf(config: LeafConfig) -> Result<()> {
    let name = config.name.clone();
    let addr = config.app_addr.clone();
    serve(&name, &addr, api::create_leaf_router(config)).await
}

/// Runs the aggregator's application and metrics listeners side by side
///
/// # Errors
///
/// Returns the first error of either listener.
pub async fn run_aggregator(config: AggregatorConfig) -> Result<()> {
    tracing::info!(
        "Downstream endpoints: {} at '{}', {} at '{}'",
        config.leaf_b.name,
        config.leaf_b.endpoint(),
        config.leaf_c.name,
        config.leaf_c.endpoint()
    );

    let state = Arc::new(AppState::new(config));
    let app = api::create_aggregator_router(state.clone());
    let metrics = api::create_metrics_router(state.clone());

    tokio::try_join!(
        serve(&state.config.name, &state.config.app_addr, app),
        serve("metrics", &state.config.metrics_addr, metrics),
    )?;

    Ok(())
}

async fn serve(what: &str, addr: &str, app: Router) -> Result<()> {
    let addr: SocketAddr = addr.parse().map_err(|e| {
        tracing::error!("Invalid {} server address '{}': {}", what, addr, e);
        e
    })?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Error starting {} server on {}: {}", what, addr, e);
        e
    })?;

    tracing::info!("Starting {} server on: {}", what, addr);

    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("{} server error: {}", what, e);
        e
    })?;

    Ok(())
}
