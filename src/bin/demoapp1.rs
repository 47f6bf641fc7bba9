// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! demoapp1: calls demoapp2 then demoapp3 and combines their payloads

use fanout_demo::{AggregatorConfig, Result, run_aggregator, setup_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AggregatorConfig::from_env();

    run_aggregator(config).await
}
