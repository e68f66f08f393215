//! # API Error Types
//!
//! ## Error Mapping
//! ```text
//! reqwest::Error (connect, timeout, body)   → ApiError::Request
//! HTTP 404                                  → ApiError::NotFound
//! HTTP 4xx/5xx                              → ApiError::Status
//! Bad JSON body                             → ApiError::Decode
//!
//! ApiError → ServiceError (rocket-core) at the trait boundary
//! ```

use rocket_core::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The resource does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the expected JSON.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The client could not be configured.
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { resource, id } => ServiceError::NotFound {
                resource: resource.to_string(),
                id,
            },
            ApiError::Decode { .. } => ServiceError::InvalidData(err.to_string()),
            other => ServiceError::Unavailable(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_identity() {
        let err = ApiError::NotFound {
            resource: "Product",
            id: "9".to_string(),
        };
        assert_eq!(ServiceError::from(err), ServiceError::not_found("Product", 9));
    }

    #[test]
    fn test_status_is_unavailable() {
        let err = ApiError::Status {
            status: 503,
            url: "http://localhost:3333/stock/1".to_string(),
        };
        assert!(matches!(ServiceError::from(err), ServiceError::Unavailable(_)));
    }
}
