mod common;

use common::MockStore;
use reward_auth::AuthenticationError;
use reward_auth::Claims;
use reward_auth::Credential;
use reward_auth::StoreError;

fn claims_for(credential: &Credential) -> Claims {
    Claims::new(&credential.user_id)
        .with_claim("name", "Alice")
        .with_claim("phone", "555-0100")
}

#[tokio::test]
async fn test_login_success() {
    let authenticator = common::authenticator();
    let hash = authenticator
        .hash_password("password123")
        .expect("Failed to hash password");

    let mut store = MockStore::new();
    store
        .expect_lookup_credential()
        .withf(|identifier| identifier == "555-0100")
        .times(1)
        .returning(move |_| Ok(Some(Credential::new("user-1", hash.clone()))));

    let token = authenticator
        .login(&store, "555-0100", "password123", claims_for)
        .await
        .expect("Login failed");

    assert_eq!(token.token_type, "bearer");

    let claims = authenticator
        .decode_access_token(&token.access_token)
        .expect("Failed to decode token");
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.name(), Some("Alice"));
    assert_eq!(claims.phone(), Some("555-0100"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let authenticator = common::authenticator();
    let hash = authenticator
        .hash_password("password123")
        .expect("Failed to hash password");

    let mut store = MockStore::new();
    store
        .expect_lookup_credential()
        .times(1)
        .returning(move |_| Ok(Some(Credential::new("user-1", hash.clone()))));

    let result = authenticator
        .login(&store, "user-1", "password124", claims_for)
        .await;

    assert!(matches!(
        result,
        Err(AuthenticationError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let authenticator = common::authenticator();

    let mut store = MockStore::new();
    store
        .expect_lookup_credential()
        .times(1)
        .returning(|_| Ok(None));

    let result = authenticator
        .login(&store, "nobody", "password123", claims_for)
        .await;

    assert!(matches!(
        result,
        Err(AuthenticationError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_store_failure() {
    let authenticator = common::authenticator();

    let mut store = MockStore::new();
    store
        .expect_lookup_credential()
        .times(1)
        .returning(|_| Err(StoreError::Unavailable("connection refused".to_string())));

    let result = authenticator
        .login(&store, "user-1", "password123", claims_for)
        .await;

    assert!(matches!(result, Err(AuthenticationError::StoreError(_))));
}

#[tokio::test]
async fn test_register_then_login() {
    let authenticator = common::authenticator();

    let registration = authenticator
        .register("abcdef", claims_for)
        .expect("Registration failed");
    let stored = registration.credential.clone();

    let mut store = MockStore::new();
    store
        .expect_lookup_credential()
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));

    let token = authenticator
        .login(&store, "555-0100", "abcdef", claims_for)
        .await
        .expect("Login failed");

    let claims = authenticator
        .authorize(&format!("Bearer {}", token.access_token))
        .expect("Authorization failed");
    assert_eq!(claims.sub, registration.credential.user_id);
}
