//! Errors surfaced by backend clients.
//!
//! Kept separate from `AppError` so callers decide how a failure is shown
//! (not-found state vs. blocking error vs. silently degraded section).
use thiserror::Error;

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("not found")]
    NotFound,
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid backend url: {0}")]
    InvalidBaseUrl(String),
}
