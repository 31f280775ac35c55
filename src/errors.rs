use reqwest::StatusCode;
use std::fmt;

/// Failure of a call to one of the backend collaborators.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// The collaborator answered with a non-success status.
    Rejected(StatusCode),
    /// The request could not complete (DNS, connection, timeout).
    Unreachable(String),
    /// The response arrived but its body could not be read or decoded.
    InvalidBody(String),
    /// The request URL could not be built from the configured base URL.
    InvalidUrl(String),
}

impl ClientError {
    /// True when the collaborator was reached and refused the request.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Rejected(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Rejected(status) => write!(f, "Backend rejected request: {}", status),
            ClientError::Unreachable(msg) => write!(f, "Backend unreachable: {}", msg),
            ClientError::InvalidBody(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::InvalidUrl(msg) => write!(f, "Invalid request URL: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    /// Converts a `reqwest::Error` into a `ClientError`.
    ///
    /// Decode failures are reported as `InvalidBody`; everything else means the
    /// exchange never completed. Non-success statuses are mapped to `Rejected`
    /// by the caller before any body is read.
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidBody(err.to_string())
        } else {
            ClientError::Unreachable(err.to_string())
        }
    }
}
