#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use reward_auth::config::PasswordConfig;
use reward_auth::AuthConfig;
use reward_auth::Authenticator;
use reward_auth::Credential;
use reward_auth::CredentialStore;
use reward_auth::StoreError;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const OTHER_SECRET: &str = "another-secret-key-for-jwt-signing-32-bytes";

mock! {
    pub Store {}

    #[async_trait]
    impl CredentialStore for Store {
        async fn lookup_credential(&self, identifier: &str) -> Result<Option<Credential>, StoreError>;
    }
}

/// Configuration with cheap Argon2 costs so tests stay fast.
pub fn test_config(secret: &str) -> AuthConfig {
    let mut config = AuthConfig::with_secret(secret);
    config.password = PasswordConfig {
        memory_kib: 1024,
        iterations: 1,
        ..PasswordConfig::default()
    };
    config
}

pub fn authenticator() -> Authenticator {
    authenticator_with_secret(TEST_SECRET)
}

pub fn authenticator_with_secret(secret: &str) -> Authenticator {
    Authenticator::from_config(&test_config(secret)).expect("Invalid test config")
}
