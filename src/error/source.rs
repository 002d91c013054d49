use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Explorer request failed: {0}")]
    RequestFailed(String),

    #[error("Explorer API rejected the request: {0}")]
    ApiError(String),

    #[error("Failed to decode explorer response: {0}")]
    DecodeError(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientError(String),
}
