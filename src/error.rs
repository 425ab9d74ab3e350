use reqwest::StatusCode;
use thiserror::Error;

/// A non-2xx answer from the API.
///
/// Client methods return `anyhow::Result`; recover the status with
/// `err.downcast_ref::<TransportError>()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API request to {url} failed with status {status}")]
pub struct TransportError {
    pub status: StatusCode,
    pub url: String,
}

impl TransportError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}
