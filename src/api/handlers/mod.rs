// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod aggregate;
mod leaf;
mod metrics;

pub use aggregate::aggregate_handler;
pub use leaf::leaf_handler;
pub use metrics::metrics_handler;
