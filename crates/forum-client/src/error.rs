use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the storage API, as seen by a calling service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout...
    #[error("storage service unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The storage API answered 400 with an `error` description.
    #[error("{0}")]
    Refused(String),

    #[error("storage service answered {0}")]
    Status(StatusCode),

    #[error("invalid response from storage service: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UpstreamError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, UpstreamError::Unavailable(_))
    }

    /// Description safe to hand to end users: no upstream address, no transport detail.
    pub fn summary(&self) -> String {
        match self {
            UpstreamError::Unavailable(_) => "storage service unavailable".to_string(),
            UpstreamError::Refused(reason) => reason.clone(),
            UpstreamError::Status(status) => format!("storage service answered {}", status.as_u16()),
            UpstreamError::Decode(_) => "invalid response from storage service".to_string(),
            UpstreamError::Client(_) => "storage service client is misconfigured".to_string(),
        }
    }
}
