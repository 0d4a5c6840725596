use thiserror::Error;

/// Convenient result alias for the Goong Map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the Goong API answered with a non-2xx status.
    ///
    /// `message` carries the upstream body's `message` field when the body was
    /// JSON and contained one.
    #[error("Goong API returned status {status}")]
    UpstreamStatus { status: u16, message: Option<String> },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True when the outbound request never produced a response (connection
    /// refused, timeout, DNS failure). The gateway maps this case to 503.
    pub fn is_no_response(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::UpstreamStatus { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_display() {
        let err = Error::UpstreamStatus {
            status: 404,
            message: Some("not found".to_string()),
        };
        assert_eq!(err.to_string(), "Goong API returned status 404");
    }

    #[test]
    fn test_upstream_status_is_not_no_response() {
        let err = Error::UpstreamStatus {
            status: 500,
            message: None,
        };
        assert!(!err.is_no_response());
    }
}
