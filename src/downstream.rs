// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP client for the leaf services

use crate::config::{AggregatorConfig, DownstreamConfig};
use crate::error::{AppError, FetchError, Result};

/// Client used by the aggregator to call its leaf services
///
/// Wraps a single `reqwest::Client` so connections are pooled across
/// requests. No timeout is configured beyond the transport defaults.
#[derive(Clone, Default)]
pub struct DownstreamClient {
    http: reqwest::Client,
}

impl DownstreamClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls both leaves in order and composes the aggregate response
    ///
    /// # Errors
    ///
    /// Returns the first downstream failure; the second leaf is not called
    /// when the first one fails.
    pub async fn aggregate(&self, config: &AggregatorConfig) -> Result<String> {
        let first = self.call(&config.leaf_b).await?;
        let second = self.call(&config.leaf_c).await?;
        Ok(compose_response(&config.name, &first, &second))
    }

    /// Fetches the payload of one leaf, tagging failures with the leaf name
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Downstream`] if the request or the body read fails.
    pub async fn call(&self, leaf: &DownstreamConfig) -> Result<String> {
        self.fetch(&leaf.endpoint())
            .await
            .map_err(|source| AppError::Downstream {
                service: leaf.name.clone(),
                source,
            })
    }

    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let payload = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(String::from_utf8_lossy(&payload).into_owned())
    }
}

/// Formats the aggregate body as `"<name>: <first> <second>"`
#[must_use]
pub fn compose_response(name: &str, first: &str, second: &str) -> String {
    format!("{name}: {first} {second}")
}
