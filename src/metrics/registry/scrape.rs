// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request accounting and text encoding

use crate::error::{AppError, Result};
use crate::metrics::labels::RequestLabels;
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    pub fn record_request(&self, labels: &RequestLabels) {
        self.http_requests.get_or_create(labels).inc();
    }

    /// Current value of the request counter for `labels`, zero if never recorded
    #[must_use]
    pub fn request_count(&self, labels: &RequestLabels) -> u64 {
        self.http_requests.get(labels).map_or(0, |counter| counter.get())
    }
}
