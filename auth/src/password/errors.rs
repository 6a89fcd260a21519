use thiserror::Error;

/// Password policy violations detected before hashing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid password: {0}")]
    Validation(#[from] ValidationError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
