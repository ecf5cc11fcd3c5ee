//! Catalog client error types.

/// Errors from a transit-data source.
///
/// Note what is NOT here: unknown ids in a resolve call are silently
/// omitted from results, and empty result sets are ordinary values.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not parse
    #[error("response parse error: {message}")]
    Json { message: String },

    /// Provider returned an error status code
    #[error("provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the provider
    #[error("rate limited by the transit data provider")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "provider error 500: Internal Server Error");

        let err = CatalogError::Json {
            message: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("parse error"));

        assert_eq!(
            CatalogError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );
    }
}
