//! Credential handling for the recycling-reward kiosk backend
//!
//! Provides the authentication core used by the HTTP layer:
//! - Password pre-hashing (SHA-256) and hashing (Argon2id)
//! - Stateless access tokens (HS256 JWT) with expiry
//! - Bearer header parsing and token validation
//! - Registration and login coordination over a credential store port
//!
//! Storage and routing stay outside this crate. Storage implements
//! [`CredentialStore`]; routing calls [`Authenticator`].
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use reward_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("abcdef").unwrap();
//! assert!(hasher.verify("abcdef", &hash));
//! assert!(!hasher.verify("abcdeg", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use reward_auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("u1").with_claim("name", "Alice");
//!
//! let token = auth.create_access_token(&claims, None).unwrap();
//! let decoded = auth.decode_access_token(&token).unwrap();
//!
//! assert_eq!(decoded.sub, "u1");
//! assert_eq!(decoded.name(), Some("Alice"));
//! assert!(decoded.exp.is_some());
//! ```
//!
//! ## Authenticated Requests
//! ```
//! use reward_auth::{Authenticator, Claims, TokenError};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let token = auth.create_access_token(&Claims::new("u1"), None).unwrap();
//!
//! let claims = auth.authorize(&format!("Bearer {}", token)).unwrap();
//! assert_eq!(claims.sub, "u1");
//!
//! assert_eq!(auth.authorize("Bearer forged.token.value"), Err(TokenError::Invalid));
//! ```

pub mod authenticator;
pub mod config;
pub mod credential;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::Registration;
pub use self::config::AuthConfig;
pub use credential::Credential;
pub use credential::CredentialStore;
pub use credential::StoreError;
pub use jwt::bearer_token;
pub use jwt::ClaimValue;
pub use jwt::Claims;
pub use jwt::IssueError;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::ValidationError;
