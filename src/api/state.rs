//! Application state shared across HTTP handlers

use crate::config::AggregatorConfig;
use crate::downstream::DownstreamClient;
use crate::metrics::MetricsRegistry;

/// Shared aggregator state
pub struct AppState {
    pub config: AggregatorConfig,
    pub metrics: MetricsRegistry,
    pub client: DownstreamClient,
}

impl AppState {
    /// Builds the state with a fresh registry named after the aggregator
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        let metrics = MetricsRegistry::new(&config.name);
        Self {
            config,
            metrics,
            client: DownstreamClient::new(),
        }
    }
}
