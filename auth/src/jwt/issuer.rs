use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::IssueError;

/// Default access token lifetime: seven days.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);

/// Signs access tokens with HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    default_ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret
    /// * `default_ttl` - Lifetime used when `issue` receives no explicit ttl
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            default_ttl,
        }
    }

    /// Sign claims into a compact token that expires after `ttl`.
    ///
    /// Any `exp` already set on `claims` is overwritten.
    ///
    /// # Arguments
    /// * `claims` - Claims to sign
    /// * `ttl` - Token lifetime, whole seconds; `None` uses the default
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `InvalidTtl` - Lifetime is under one second or overflows a timestamp
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims, ttl: Option<Duration>) -> Result<String, IssueError> {
        self.issue_at(claims, ttl, Utc::now().timestamp())
    }

    pub(crate) fn issue_at(
        &self,
        claims: &Claims,
        ttl: Option<Duration>,
        now: i64,
    ) -> Result<String, IssueError> {
        let seconds = ttl.unwrap_or(self.default_ttl).as_secs();

        let exp = i64::try_from(seconds)
            .ok()
            .filter(|seconds| *seconds > 0)
            .and_then(|seconds| now.checked_add(seconds))
            .ok_or(IssueError::InvalidTtl { seconds })?;

        let claims = claims.clone().with_expiration(exp);

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| IssueError::EncodingFailed(e.to_string()))?;

        tracing::debug!(sub = %claims.sub, exp, "Access token issued");

        Ok(token)
    }
}
