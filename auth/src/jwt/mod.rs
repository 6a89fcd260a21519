pub mod bearer;
pub mod claims;
pub mod errors;
pub mod issuer;
pub mod validator;

pub use bearer::bearer_token;
pub use claims::ClaimValue;
pub use claims::Claims;
pub use errors::IssueError;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_TOKEN_TTL;
pub use validator::TokenValidator;
