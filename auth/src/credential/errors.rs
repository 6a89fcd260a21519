use thiserror::Error;

/// Error reported by a credential store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}
