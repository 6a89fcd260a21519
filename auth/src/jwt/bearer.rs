use super::errors::TokenError;

const SCHEME: &str = "bearer";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. A missing scheme, another
/// scheme or an empty token are all `Invalid`.
pub fn bearer_token(header_value: &str) -> Result<&str, TokenError> {
    let (scheme, token) = header_value
        .trim()
        .split_once(' ')
        .ok_or(TokenError::Invalid)?;

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(TokenError::Invalid);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Invalid);
    }

    Ok(token)
}
