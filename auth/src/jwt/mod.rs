pub mod claims;
pub mod errors;
pub mod key;
pub mod service;

pub use claims::ClaimSet;
pub use claims::ClaimSetBuilder;
pub use claims::Claims;
pub use errors::IssueError;
pub use errors::KeyError;
pub use errors::VerificationError;
pub use key::SigningKey;
pub use service::TokenService;
