use thiserror::Error;

/// Error building a signing key from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error issuing a token.
#[derive(Debug, Clone, Error)]
pub enum IssueError {
    #[error("Claim '{0}' is reserved and cannot be set by the caller")]
    ReservedClaim(String),

    #[error("Token lifetime out of range")]
    InvalidTtl,

    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

/// Why a presented token was not accepted.
///
/// Every variant is terminal: retrying the same token yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}
