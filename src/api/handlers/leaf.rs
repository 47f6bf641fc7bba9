use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::config::LeafConfig;

/// ANY /<leaf-name>
///
/// Answers every request with the leaf's own name.
pub async fn leaf_handler(State(config): State<Arc<LeafConfig>>) -> impl IntoResponse {
    tracing::info!("Serving: {}", config.name);
    (StatusCode::OK, config.name.clone())
}
