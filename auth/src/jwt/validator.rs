use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Verifies access tokens signed by a [`TokenIssuer`](super::TokenIssuer)
/// holding the same secret.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a new token validator.
    ///
    /// Only HS256 is accepted, `sub` and `exp` are required and expiry is
    /// checked with no leeway.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decode and validate a token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// The signed claims, `exp` included
    ///
    /// # Errors
    /// * `Expired` - Signature is valid but `exp` has passed
    /// * `Invalid` - Anything else: bad signature, malformed token,
    ///   unsupported algorithm, claims outside the schema
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::info!("Rejected expired access token");
                    TokenError::Expired
                }
                kind => {
                    tracing::debug!(reason = ?kind, "Rejected invalid access token");
                    TokenError::Invalid
                }
            })
    }
}
