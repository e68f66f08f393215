//! # API Configuration

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Default storefront API address (the local json-server used in development).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Storefront API client configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = ApiConfig::new(Url::parse("https://api.example.com")?)
///     .timeout(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL; `products/{id}` and `stock/{id}` are resolved against it.
    pub base_url: Url,

    /// Per-request timeout. A timed-out lookup is a failed lookup.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        ApiConfig {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Parses `base_url` and builds a config from it.
    pub fn from_url_str(base_url: &str) -> ApiResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e)))?;
        Ok(ApiConfig::new(url))
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::from_url_str(DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_from_url_str_rejects_garbage() {
        assert!(matches!(
            ApiConfig::from_url_str("not a url"),
            Err(ApiError::InvalidConfig(_))
        ));
    }
}
