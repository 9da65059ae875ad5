use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Open-ended set of custom claims carried by a token (e.g. `role`).
pub type ClaimSet = HashMap<String, serde_json::Value>;

/// Wire payload of an issued token.
///
/// `sub`, `exp` and `iat` follow RFC 7519; everything else is flattened
/// from `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    #[serde(default)]
    pub iat: i64,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: ClaimSet,
}

impl Claims {
    /// Keys the service sets itself and callers may not override.
    pub const RESERVED: [&'static str; 3] = ["sub", "exp", "iat"];

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is no longer valid from the expiration second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

/// Builder for a claim set.
#[derive(Debug, Default, Clone)]
pub struct ClaimSetBuilder {
    claims: ClaimSet,
}

impl ClaimSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom field. Values that fail to serialize are skipped.
    pub fn with(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.claims.insert(key.to_string(), json_value);
        }
        self
    }

    pub fn build(self) -> ClaimSet {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "a@example.com".to_string(),
            exp: 1000,
            iat: 900,
            extra: ClaimSet::new(),
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_extra_is_flattened() {
        let claims = Claims {
            sub: "a@example.com".to_string(),
            exp: 2000,
            iat: 1000,
            extra: ClaimSetBuilder::new().with("role", "USER").build(),
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["role"], "USER");
        assert_eq!(value["sub"], "a@example.com");

        let parsed: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, claims);
        assert!(!parsed.extra.contains_key("sub"));
    }
}
