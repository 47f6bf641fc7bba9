// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the fan-out demo services
//!
//! Listening addresses and service names are fixed constants. The aggregator
//! additionally reads the base URLs of both leaf services from the environment.


/// Default configuration values
pub mod defaults {
    pub const APP_ADDR: &str = "0.0.0.0:8080";
    pub const METRICS_ADDR: &str = "0.0.0.0:9000";
}

/// Service names, used both as endpoint paths and as response payloads
pub mod names {
    pub const AGGREGATOR: &str = "demoapp1";
    pub const LEAF_B: &str = "demoapp2";
    pub const LEAF_C: &str = "demoapp3";
}

/// Environment variable names used by the aggregator
pub mod env_vars {
    pub const DEMOAPP2_ADDR: &str = "DEMOAPP2_ADDR";
    pub const DEMOAPP3_ADDR: &str = "DEMOAPP3_ADDR";
}

/// Configuration for a leaf service
#[derive(Debug, Clone)]
pub struct LeafConfig {
    pub name: String,
    pub app_addr: String,
}

impl LeafConfig {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            app_addr: defaults::APP_ADDR.to_string(),
        }
    }

    /// Path the leaf answers on
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.name)
    }
}

/// A downstream leaf as seen from the aggregator
#[derive(Debug, Clone)]
pub struct DownstreamConfig {
    pub name: String,
    /// Scheme, host and port, e.g. `http://demoapp2:8080`
    pub base_url: String,
}

impl DownstreamConfig {
    /// Full URL of the leaf endpoint
    ///
    /// The base URL is used as given; a missing or malformed value surfaces
    /// as a request error when the call is attempted.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.name)
    }
}

/// Aggregator configuration
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub name: String,
    pub app_addr: String,
    pub metrics_addr: String,
    pub leaf_b: DownstreamConfig,
    pub leaf_c: DownstreamConfig,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        AggregatorConfig {
            name: names::AGGREGATOR.to_string(),
            app_addr: defaults::APP_ADDR.to_string(),
            metrics_addr: defaults::METRICS_ADDR.to_string(),
            leaf_b: DownstreamConfig {
                name: names::LEAF_B.to_string(),
                base_url: String::new(),
            },
            leaf_c: DownstreamConfig {
                name: names::LEAF_C.to_string(),
                base_url: String::new(),
            },
        }
    }
}

impl AggregatorConfig {
    /// Loads configuration from environment variables
    ///
    /// `.env` is expected to be loaded by the caller beforehand.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.leaf_b.base_url = required(&lookup, env_vars::DEMOAPP2_ADDR);
        config.leaf_c.base_url = required(&lookup, env_vars::DEMOAPP3_ADDR);
        config
    }
}

fn required<F>(lookup: &F, key: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        tracing::warn!("{} is not set; calls to this downstream will fail", key);
        String::new()
    })
}
