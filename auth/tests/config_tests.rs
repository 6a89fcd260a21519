use std::env;
use std::time::Duration;

use reward_auth::AuthConfig;
use reward_auth::Authenticator;
use reward_auth::Claims;

// Only test in this binary, so the process environment is not shared.
#[test]
fn test_load_from_files_and_prefixed_env() {
    env::set_var("REWARD_AUTH_JWT__SECRET", "env-secret-key-for-jwt-signing-at-least-32-bytes");
    env::set_var("REWARD_AUTH_JWT__TTL_SECONDS", "3600");
    // Unprefixed variables must not leak into the tables.
    env::set_var("PASSWORD", "hunter2");
    env::set_var("JWT", "not-a-table");

    let config = AuthConfig::load().expect("Failed to load config");

    assert_eq!(config.jwt.secret, "env-secret-key-for-jwt-signing-at-least-32-bytes");
    assert_eq!(config.token_ttl(), Duration::from_secs(3600));
    // From config/default.toml
    assert_eq!(config.password.memory_kib, 19456);
    assert_eq!(config.password.min_length, 6);

    let authenticator = Authenticator::from_config(&config).expect("Invalid config");
    let token = authenticator
        .create_access_token(&Claims::new("u1"), None)
        .expect("Failed to create token");
    assert_eq!(
        authenticator
            .decode_access_token(&token)
            .expect("Failed to decode token")
            .sub,
        "u1"
    );
}
