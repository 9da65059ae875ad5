//! Bearer-token gate.
//!
//! Turns the raw `Authorization` header of a request into an optional
//! [`Identity`]. The gate itself never rejects a request; routes that need a
//! caller must check for an empty identity themselves.

use crate::identity::Identity;
use crate::jwt::TokenService;
use crate::jwt::VerificationError;

/// Expected scheme prefix of the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Result of inspecting one request's `Authorization` header.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Header absent or not a bearer credential.
    NoHeader,
    /// Token verified.
    Authenticated(Identity),
    /// Token present but not accepted.
    Rejected(VerificationError),
}

impl GateOutcome {
    /// Collapse the outcome into the identity context for the request.
    ///
    /// Every rejection reason yields `None`, exactly like a missing header.
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            GateOutcome::Authenticated(identity) => Some(identity),
            GateOutcome::NoHeader => None,
            GateOutcome::Rejected(VerificationError::Malformed)
            | GateOutcome::Rejected(VerificationError::SignatureInvalid)
            | GateOutcome::Rejected(VerificationError::Expired) => None,
        }
    }
}

/// Extract the token from a bearer `Authorization` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix(BEARER_PREFIX)
}

/// Evaluate an `Authorization` header value against `tokens`.
pub fn evaluate(header: Option<&str>, tokens: &TokenService) -> GateOutcome {
    let Some(token) = header.and_then(bearer_token) else {
        return GateOutcome::NoHeader;
    };

    match tokens.verify(token) {
        Ok(identity) => GateOutcome::Authenticated(identity),
        Err(e) => GateOutcome::Rejected(e),
    }
}
