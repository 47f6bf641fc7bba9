//! Label types for Prometheus metrics

use axum::http::{Method, StatusCode};
use prometheus_client::encoding::EncodeLabelSet;

/// Labels of the per-request counter
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub path: String,
    pub method: String,
    pub status: String,
}

impl RequestLabels {
    /// Builds labels for a served request, using the status reason phrase
    /// (`OK`, `Internal Server Error`) as the status label
    #[must_use]
    pub fn new(path: &str, method: &Method, status: StatusCode) -> Self {
        Self {
            path: path.to_string(),
            method: method.as_str().to_string(),
            status: status.canonical_reason().unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_labels_success() {
        let labels = RequestLabels::new("/demoapp1", &Method::GET, StatusCode::OK);

        assert_eq!(labels.path, "/demoapp1");
        assert_eq!(labels.method, "GET");
        assert_eq!(labels.status, "OK");
    }

    #[test]
    fn test_request_labels_internal_error() {
        let labels = RequestLabels::new(
            "/demoapp1",
            &Method::POST,
            StatusCode::INTERNAL_SERVER_ERROR,
        );

        assert_eq!(labels.method, "POST");
        assert_eq!(labels.status, "Internal Server Error");
    }

    #[test]
    fn test_request_labels_hash() {
        use std::collections::HashMap;

        let labels1 = RequestLabels::new("/demoapp1", &Method::GET, StatusCode::OK);
        let labels2 = RequestLabels::new("/demoapp1", &Method::GET, StatusCode::OK);

        let mut map = HashMap::new();
        map.insert(labels1, 100);

        assert_eq!(map.get(&labels2), Some(&100));
    }
}
