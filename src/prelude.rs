// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use fanout_demo::prelude::*;
//! ```

// Core types
pub use crate::config::{AggregatorConfig, DownstreamConfig, LeafConfig};
pub use crate::error::{AppError, FetchError, Result};

// Metrics types
pub use crate::metrics::{MetricsRegistry, RequestLabels};

// Services
pub use crate::api::AppState;
pub use crate::downstream::DownstreamClient;
pub use crate::server::{run_aggregator, run_leaf};
