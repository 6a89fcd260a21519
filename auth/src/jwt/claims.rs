use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

const SUBJECT: &str = "sub";
const EXPIRATION: &str = "exp";

/// Value of a single claim.
///
/// Claims are restricted to text and integers so the signed payload keeps
/// a fixed, checkable schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClaimValue {
    Integer(i64),
    Text(String),
}

impl ClaimValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::Text(text) => Some(text),
            ClaimValue::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ClaimValue::Integer(value) => Some(*value),
            ClaimValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ClaimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimValue::Integer(value) => value.fmt(f),
            ClaimValue::Text(text) => text.fmt(f),
        }
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::Text(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::Text(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Integer(value)
    }
}

impl From<i32> for ClaimValue {
    fn from(value: i32) -> Self {
        ClaimValue::Integer(value.into())
    }
}

impl From<u32> for ClaimValue {
    fn from(value: u32) -> Self {
        ClaimValue::Integer(value.into())
    }
}

/// Access token claims.
///
/// `sub` is always present. `exp` is stamped by the issuer and is always
/// present on claims returned by the validator. Any other claim lives in
/// `extra`, ordered by name, and is flattened into the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Additional caller supplied claims, never `sub` or `exp`
    #[serde(flatten)]
    extra: BTreeMap<String, ClaimValue>,
}

impl Claims {
    /// Create claims for a subject.
    pub fn new(sub: impl ToString) -> Self {
        Self {
            sub: sub.to_string(),
            exp: None,
            extra: BTreeMap::new(),
        }
    }

    /// Add a claim.
    ///
    /// `sub` replaces the subject. `exp` is ignored: the issuer owns it.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a claim in place. Same rules as [`Claims::with_claim`].
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ClaimValue>) {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            SUBJECT => self.sub = value.to_string(),
            EXPIRATION => {}
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.extra.remove(SUBJECT);
        self.extra.remove(EXPIRATION);
        self.exp = Some(exp);
        self
    }

    /// Claims other than `sub` and `exp`, ordered by name.
    pub fn extra(&self) -> &BTreeMap<String, ClaimValue> {
        &self.extra
    }

    /// Look up a claim by name, including `sub` and `exp`.
    pub fn get(&self, key: &str) -> Option<ClaimValue> {
        match key {
            SUBJECT => Some(ClaimValue::Text(self.sub.clone())),
            EXPIRATION => self.exp.map(ClaimValue::Integer),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// Display name, when present.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(ClaimValue::as_str)
    }

    /// Phone number, when present.
    pub fn phone(&self) -> Option<&str> {
        self.extra.get("phone").and_then(ClaimValue::as_str)
    }
}
