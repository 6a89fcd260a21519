use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::credential::Credential;
use crate::credential::CredentialStore;
use crate::credential::StoreError;
use crate::jwt::bearer_token;
use crate::jwt::Claims;
use crate::jwt::IssueError;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and token handling.
///
/// Immutable after construction; share one instance behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
}

/// Token handed to a client after registration or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Credential to persist
    pub credential: Credential,
    /// First access token of the new user
    pub token: AccessToken,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    IssueError(#[from] IssueError),

    #[error("Credential store error: {0}")]
    StoreError(#[from] StoreError),
}

impl Authenticator {
    /// Create a new authenticator with default lifetimes and costs.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret, crate::jwt::DEFAULT_TOKEN_TTL),
            token_validator: TokenValidator::new(jwt_secret),
        }
    }

    /// Create an authenticator from loaded configuration.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Configuration failed validation
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let params = config
            .password
            .params()
            .map_err(|e| ConfigError::Message(format!("invalid password costs: {}", e)))?;
        let secret = config.jwt.secret.as_bytes();

        Ok(Self {
            password_hasher: PasswordHasher::with_params(params, config.password.min_length),
            token_issuer: TokenIssuer::new(secret, config.token_ttl()),
            token_validator: TokenValidator::new(secret),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `Validation` - Password violates the length policy
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash. Never fails.
    pub fn verify_password(&self, password: &str, hashed: &str) -> bool {
        self.password_hasher.verify(password, hashed)
    }

    /// Issue an access token; `None` uses the configured lifetime.
    ///
    /// # Errors
    /// * `InvalidTtl` - Lifetime under one second
    /// * `EncodingFailed` - Token generation failed
    pub fn create_access_token(
        &self,
        claims: &Claims,
        ttl: Option<Duration>,
    ) -> Result<String, IssueError> {
        self.token_issuer.issue(claims, ttl)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `Expired` - Token lifetime has passed
    /// * `Invalid` - Token is forged, corrupted or malformed
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_validator.validate(token)
    }

    /// Validate the token carried by an `Authorization` header value.
    ///
    /// # Errors
    /// * `Expired` - Token lifetime has passed
    /// * `Invalid` - Header is not a bearer header, or the token is invalid
    pub fn authorize(&self, header_value: &str) -> Result<Claims, TokenError> {
        let token = bearer_token(header_value)?;
        self.decode_access_token(token)
    }

    /// Verify credentials and generate an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `credential` - Stored credential of the user
    /// * `claims` - Claims to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `IssueError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        credential: &Credential,
        claims: &Claims,
    ) -> Result<AccessToken, AuthenticationError> {
        if !self
            .password_hasher
            .verify(password, &credential.password_hash)
        {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(claims, None)?;

        Ok(AccessToken::bearer(access_token))
    }

    /// Create a credential for a new user and issue the first token.
    ///
    /// The user ID is a fresh UUID v4; `build_claims` receives the new
    /// credential and returns the token claims.
    ///
    /// # Errors
    /// * `PasswordError` - Password violates the policy or hashing failed
    /// * `IssueError` - Token generation failed
    pub fn register<F>(
        &self,
        password: &str,
        build_claims: F,
    ) -> Result<Registration, AuthenticationError>
    where
        F: FnOnce(&Credential) -> Claims,
    {
        let password_hash = self.password_hasher.hash(password)?;
        let credential = Credential::new(Uuid::new_v4(), password_hash);

        let claims = build_claims(&credential);
        let access_token = self.token_issuer.issue(&claims, None)?;

        tracing::info!(user_id = %credential.user_id, "Credential registered");

        Ok(Registration {
            credential,
            token: AccessToken::bearer(access_token),
        })
    }

    /// Look up a credential, verify the password and issue a token.
    ///
    /// An unknown identifier and a wrong password both yield
    /// `InvalidCredentials` and cost one full password verification.
    ///
    /// # Arguments
    /// * `store` - Credential storage
    /// * `identifier` - User ID or phone number
    /// * `password` - Plaintext password
    /// * `build_claims` - Builds the token claims from the matched credential
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user or password does not match
    /// * `StoreError` - Credential lookup failed
    /// * `IssueError` - Token generation failed
    pub async fn login<S, F>(
        &self,
        store: &S,
        identifier: &str,
        password: &str,
        build_claims: F,
    ) -> Result<AccessToken, AuthenticationError>
    where
        S: CredentialStore + ?Sized,
        F: FnOnce(&Credential) -> Claims,
    {
        let Some(credential) = store.lookup_credential(identifier).await? else {
            self.password_hasher.verify_decoy(password);
            tracing::info!("Login rejected: unknown identifier");
            return Err(AuthenticationError::InvalidCredentials);
        };

        let claims = build_claims(&credential);

        self.authenticate(password, &credential, &claims)
            .inspect(|_| tracing::info!(user_id = %credential.user_id, "Login succeeded"))
            .inspect_err(|e| {
                if matches!(e, AuthenticationError::InvalidCredentials) {
                    tracing::info!(user_id = %credential.user_id, "Login rejected: wrong password");
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordConfig;

    fn authenticator() -> Authenticator {
        let mut config = AuthConfig::with_secret("test_secret_key_at_least_32_bytes!");
        config.password = PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            ..PasswordConfig::default()
        };

        Authenticator::from_config(&config).expect("Invalid test config")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");
        let credential = Credential::new("user123", hash);

        let claims = Claims::new("user123").with_claim("name", "Alice");
        let result = authenticator
            .authenticate(password, &credential, &claims)
            .expect("Authentication failed");

        assert_eq!(result.token_type, "bearer");

        let decoded = authenticator
            .decode_access_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.name(), Some("Alice"));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");
        let credential = Credential::new("user123", hash);

        let result = authenticator.authenticate("wrong_password", &credential, &Claims::new("user123"));
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupted_hash() {
        let authenticator = authenticator();
        let credential = Credential::new("user123", "not-a-hash".to_string());

        let result = authenticator.authenticate("my_password", &credential, &Claims::new("user123"));
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register() {
        let authenticator = authenticator();

        let registration = authenticator
            .register("password123", |credential| {
                Claims::new(&credential.user_id).with_claim("phone", "555")
            })
            .expect("Registration failed");

        assert!(Uuid::parse_str(&registration.credential.user_id).is_ok());
        assert!(authenticator.verify_password("password123", &registration.credential.password_hash));

        let decoded = authenticator
            .decode_access_token(&registration.token.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, registration.credential.user_id);
        assert_eq!(decoded.phone(), Some("555"));
    }

    #[test]
    fn test_register_short_password() {
        let authenticator = authenticator();

        let result = authenticator.register("12345", |credential| Claims::new(&credential.user_id));
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(PasswordError::Validation(_)))
        ));
    }

    #[test]
    fn test_authorize() {
        let authenticator = authenticator();
        let token = authenticator
            .create_access_token(&Claims::new("user123"), None)
            .expect("Failed to create token");

        let claims = authenticator
            .authorize(&format!("Bearer {}", token))
            .expect("Authorization failed");
        assert_eq!(claims.sub, "user123");

        assert_eq!(authenticator.authorize(&token), Err(TokenError::Invalid));
        assert_eq!(
            authenticator.authorize("Bearer invalid.token.here"),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_access_token_serializes_like_oauth() {
        let token = AccessToken::bearer("abc".to_string());

        assert_eq!(
            serde_json::to_value(&token).expect("Failed to serialize"),
            serde_json::json!({ "access_token": "abc", "token_type": "bearer" })
        );
    }
}
