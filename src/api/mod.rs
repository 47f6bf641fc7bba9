//! HTTP API module for the fan-out demo services
//!
//! # Endpoints
//! - `ANY /<aggregator-name>` — sequential fan-out to both leaves
//! - `ANY /<leaf-name>` — fixed leaf payload
//! - `GET /metrics` — Prometheus metrics (aggregator only, separate listener)

pub mod handlers;
mod state;

use axum::{
    Router,
    routing::{any, get},
};
use std::sync::Arc;

use crate::config::LeafConfig;

pub use state::AppState;

/// Creates the aggregator application router
pub fn create_aggregator_router(state: Arc<AppState>) -> Router {
    let path = format!("/{}", state.config.name);
    Router::new()
        .route(&path, any(handlers::aggregate_handler))
        .with_state(state)
}

/// Creates the router of a leaf service
pub fn create_leaf_router(config: LeafConfig) -> Router {
    let path = config.path();
    Router::new()
        .route(&path, any(handlers::leaf_handler))
        .with_state(Arc::new(config))
}

/// Creates the metrics router, served on its own listener
pub fn create_metrics_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
