// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! demoapp2: leaf B, answers `/demoapp2` with its own name

use fanout_demo::{LeafConfig, Result, names, run_leaf, setup_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    run_leaf(LeafConfig::new(names::LEAF_B)).await
}
