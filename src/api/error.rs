//! API Errors

use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("server responded with {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
