pub mod errors;
pub mod models;
pub mod ports;

pub use errors::StoreError;
pub use models::Credential;
pub use ports::CredentialStore;
