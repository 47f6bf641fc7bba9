// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Fan-out demo
//!
//! Three small HTTP services demonstrating a sequential fan-out call.
//!
//! Two leaf services answer with their own name. The aggregator calls both
//! in order, returns `"<name>: <leaf-b> <leaf-c>"`, and counts every request
//! in a Prometheus counter served on a separate listener.
//!
//! ## Main modules
//! - `api`: HTTP routers and handlers
//! - `config`: service names, addresses and environment configuration
//! - `downstream`: HTTP client for the leaf services
//! - `error`: error types
//! - `metrics`: request counter registry
//! - `server`: listener startup for each service
//! - `prelude`: commonly used types

mod api;
mod config;
mod downstream;
mod error;
mod metrics;
mod server;
mod telemetry;
pub mod prelude;

// Re-export commonly used types
/// Service configuration
pub use config::{AggregatorConfig, DownstreamConfig, LeafConfig, defaults, env_vars, names};

/// Application error and result type
pub use error::{AppError, FetchError, Result};

/// HTTP routers and shared state
pub use api::{AppState, create_aggregator_router, create_leaf_router, create_metrics_router};

/// Downstream client and response composition
pub use downstream::{DownstreamClient, compose_response};

/// Metrics registry and labels
pub use metrics::{MetricsRegistry, RequestLabels};

/// Service entry points
pub use server::{run_aggregator, run_leaf};

/// Logging setup
pub use telemetry::setup_tracing;
