use std::env;
use std::fmt;
use std::time::Duration;

use argon2::Params;
use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::jwt::DEFAULT_TOKEN_TTL;
use crate::password::MIN_PASSWORD_LENGTH;

const RECOMMENDED_SECRET_BYTES: usize = 32;
const ENV_PREFIX: &str = "REWARD_AUTH";

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub min_length: usize,
}

fn default_ttl_seconds() -> u64 {
    DEFAULT_TOKEN_TTL.as_secs()
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordConfig {
    /// Argon2 cost parameters.
    ///
    /// # Errors
    /// * `argon2::Error` - Costs are outside the ranges Argon2 accepts
    pub fn params(&self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
    }
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (REWARD_AUTH_JWT__SECRET, REWARD_AUTH_PASSWORD__MEMORY_KIB, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on prefixed environment variables (with __ as separator)
            // Example: REWARD_AUTH_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(configuration)
    }

    /// Deserialize and validate an already assembled configuration.
    pub fn from_config(configuration: Config) -> Result<Self, ConfigError> {
        let config: AuthConfig = configuration.try_deserialize()?;
        config.validate()?;

        tracing::info!(
            ttl_seconds = config.jwt.ttl_seconds,
            memory_kib = config.password.memory_kib,
            iterations = config.password.iterations,
            parallelism = config.password.parallelism,
            "Authentication configuration loaded"
        );

        Ok(config)
    }

    /// Configuration with default lifetimes and costs around a given secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig {
                secret: secret.into(),
                ttl_seconds: default_ttl_seconds(),
            },
            password: PasswordConfig::default(),
        }
    }

    /// Default token lifetime.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.jwt.ttl_seconds)
    }

    /// Check values serde cannot check.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Empty secret, zero ttl or invalid Argon2 costs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }

        if self.jwt.secret.len() < RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                length = self.jwt.secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "JWT secret is shorter than recommended for HS256"
            );
        }

        if self.jwt.ttl_seconds == 0 || i64::try_from(self.jwt.ttl_seconds).is_err() {
            return Err(ConfigError::Message(format!(
                "jwt.ttl_seconds must be a positive timestamp offset, got {}",
                self.jwt.ttl_seconds
            )));
        }

        if self.password.min_length == 0 {
            return Err(ConfigError::Message(
                "password.min_length must be at least 1".into(),
            ));
        }

        self.password
            .params()
            .map_err(|e| ConfigError::Message(format!("invalid password costs: {}", e)))?;

        Ok(())
    }
}
