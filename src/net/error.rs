//! Failure type shared by the REST helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server answered but rejected the request.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}
