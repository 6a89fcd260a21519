use thiserror::Error;

/// Token validation failure.
///
/// Deliberately coarse: a forged token and a corrupted one both surface as
/// `Invalid`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

/// Token issuance failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("Token lifetime must be at least one second and fit a timestamp, got {seconds}s")]
    InvalidTtl { seconds: u64 },

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
