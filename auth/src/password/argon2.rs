use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use serde::Deserialize;

use super::errors::PasswordError;

/// Salt used only to burn the same amount of work when a stored hash
/// cannot be parsed.
const DUMMY_SALT: [u8; 16] = [0x5a; 16];

/// How a stored hash compared against a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verification {
    Match,
    Mismatch,
    /// The stored hash could not be checked, so no derivation ran.
    Unusable,
}

/// Argon2id cost parameters.
///
/// Defaults are the Argon2 crate recommendations (19 MiB, 2 passes, 1 lane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a password hasher with the default cost parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a password hasher with explicit cost parameters.
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside the ranges Argon2 accepts
    pub fn with_params(params: HashingParams) -> Result<Self, PasswordError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated on every call, so hashing the same
    /// password twice yields two different PHC strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns `false` for a wrong password and for a stored hash that cannot
    /// be checked (unparseable, missing salt or output, foreign algorithm,
    /// out-of-range parameters). In the latter case a dummy derivation runs
    /// so every `false` costs roughly the same.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match self.check(password, hash) {
            Verification::Match => true,
            Verification::Mismatch => false,
            Verification::Unusable => {
                self.burn(password);
                false
            }
        }
    }

    /// Compare without compensating work. `Unusable` means nothing was derived.
    pub(crate) fn check(&self, password: &str, hash: &str) -> Verification {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return Verification::Unusable;
        };

        // Without both, `verify_password` reports a mismatch without deriving.
        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            return Verification::Unusable;
        }

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Verification::Match,
            Err(PasswordHashError::Password) => Verification::Mismatch,
            Err(_) => Verification::Unusable,
        }
    }

    /// Spend one derivation's worth of work without a stored hash.
    ///
    /// Used when there is nothing to verify against, e.g. an unknown account.
    pub fn burn(&self, password: &str) {
        let mut output = [0u8; 32];
        let _ = self
            .argon2
            .hash_password_into(password.as_bytes(), &DUMMY_SALT, &mut output);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
