/// Stored password hash of one user.
///
/// `password_hash` is always a PHC string produced by
/// [`PasswordHasher::hash`](crate::PasswordHasher::hash), never plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: String,
    pub password_hash: String,
}

impl Credential {
    pub fn new(user_id: impl ToString, password_hash: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            password_hash,
        }
    }
}
