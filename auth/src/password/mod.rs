pub mod argon2;
pub mod digest;
pub mod errors;

pub use self::argon2::PasswordHasher;
pub use self::argon2::MIN_PASSWORD_LENGTH;
pub use digest::digest;
pub use errors::PasswordError;
pub use errors::ValidationError;
