use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::digest::digest;
use super::errors::PasswordError;
use super::errors::ValidationError;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Fixed salt and all-zero output; never matches a real password.
const DECOY_SALT: &str = "c29tZXNhbHRzb21lc2FsdA";
const DECOY_OUTPUT: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Password hashing implementation.
///
/// Every password is first reduced to its SHA-256 hex digest and the digest
/// is hashed with Argon2id. Stored hashes are PHC strings carrying the
/// algorithm, cost parameters, salt and output.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    min_length: usize,
    decoy_hash: String,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher configured with the Argon2 default cost parameters
    pub fn new() -> Self {
        Self::with_params(Params::default(), MIN_PASSWORD_LENGTH)
    }

    /// Create a password hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `params` - Argon2 memory, iteration and parallelism costs
    /// * `min_length` - Minimum accepted password length in characters
    pub fn with_params(params: Params, min_length: usize) -> Self {
        let decoy_hash = format!(
            "$argon2id$v=19$m={},t={},p={}${}${}",
            params.m_cost(),
            params.t_cost(),
            params.p_cost(),
            DECOY_SALT,
            DECOY_OUTPUT
        );

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            min_length,
            decoy_hash,
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `Validation` - Password is shorter than the policy minimum
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        self.check_policy(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let prehashed = digest(password);

        let hash = self
            .argon2
            .hash_password(prehashed.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        tracing::debug!(algorithm = "argon2id", "Password hashed");

        Ok(hash)
    }

    /// Verify a password against a stored hash.
    ///
    /// Never fails: a malformed hash or one produced by another algorithm
    /// verifies as `false`, exactly like a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed_hash) => parsed_hash,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                return false;
            }
        };

        self.argon2
            .verify_password(digest(password).as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Run a full verification against a hash that never matches.
    ///
    /// Lets a caller spend the same work on an unknown account as on a
    /// known one.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, &self.decoy_hash);
    }

    fn check_policy(&self, password: &str) -> Result<(), ValidationError> {
        let actual = password.chars().count();

        if actual < self.min_length {
            return Err(ValidationError::TooShort {
                min: self.min_length,
                actual,
            });
        }

        Ok(())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
