// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and labels for the aggregator's request counter

mod labels;
mod registry;

/// Labels of the request counter
pub use labels::RequestLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
