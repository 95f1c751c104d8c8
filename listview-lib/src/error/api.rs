//! API error types

/// Errors that can occur while fetching a page from the list endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the endpoint.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Network error during the request (includes timeouts).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the response body.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns `true` if the server answered with a non-2xx status.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Network(err) => err.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_classification() {
        let err = ApiError::http(503, "unavailable");
        assert_eq!(err.status_code(), Some(503));
        assert!(err.is_server());
        assert!(!err.is_transport());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = ApiError::parse_with_body("expected array", "{}");
        match err {
            ApiError::Parse { message, body } => {
                assert_eq!(message, "expected array");
                assert_eq!(body.as_deref(), Some("{}"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ApiError::parse("bad").status_code(), None);
    }
}
