use crate::jwt::ClaimSet;

/// The verified caller of a request.
///
/// Only ever produced by a successful token verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub subject: String,
    pub claims: ClaimSet,
}

impl Identity {
    /// Look up a custom claim.
    pub fn claim(&self, key: &str) -> Option<&serde_json::Value> {
        self.claims.get(key)
    }

    /// Look up a custom claim holding a string.
    pub fn claim_str(&self, key: &str) -> Option<&str> {
        self.claim(key).and_then(|v| v.as_str())
    }
}
