use async_trait::async_trait;

use super::errors::StoreError;
use super::models::Credential;

/// Read access to stored credentials, implemented by the storage layer.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential of a user.
    ///
    /// # Arguments
    /// * `identifier` - User ID or phone number
    ///
    /// # Returns
    /// Optional credential (None if no user matches)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `Unavailable` - Store could not be reached
    async fn lookup_credential(&self, identifier: &str) -> Result<Option<Credential>, StoreError>;
}
