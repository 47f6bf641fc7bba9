// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::RequestLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Creates a registry whose metric names are prefixed with `service`
    ///
    /// Counters get the `_total` suffix on encoding, so the request counter
    /// is exposed as `<service>_http_requests_total`.
    #[must_use]
    pub fn new(service: &str) -> Self {
        let mut registry = Registry::with_prefix(service);

        let http_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total number of HTTP requests",
            http_requests.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            http_requests,
        }
    }
}
