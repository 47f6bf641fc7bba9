use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::metrics::RequestLabels;

/// ANY /<aggregator-name>
///
/// Calls both leaves in order and returns `"<name>: <b> <c>"`. Any downstream
/// failure aborts the request with a 500. Each completed request increments
/// the request counter exactly once, labeled with the caller's path and method.
pub async fn aggregate_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    tracing::info!("Serving: {}", state.config.name);

    let (status, response) = match state.client.aggregate(&state.config).await {
        Ok(body) => (StatusCode::OK, body.into_response()),
        Err(e) => {
            tracing::warn!("{}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
            )
        }
    };

    state
        .metrics
        .record_request(&RequestLabels::new(uri.path(), &method, status));

    response
}

/// Plain-text error reply terminated by a newline
fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        format!("{message}\n"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error calling demoapp2");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Error calling demoapp2\n");
    }
}
