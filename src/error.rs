//! Error types for the fan-out demo services

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A downstream service call failed
    #[error("Error calling {service}: {source}")]
    Downstream {
        service: String,
        #[source]
        source: FetchError,
    },

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Failure of a single HTTP call to a downstream service
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not make request to URL '{url}': {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read payload data for URL '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
