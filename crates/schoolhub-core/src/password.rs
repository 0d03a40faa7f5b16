//! Password hashing with bcrypt.

use bcrypt::{hash, verify};
use tracing::warn;

use crate::errors::AppError;

/// bcrypt work factor used for every stored password.
pub const HASH_COST: u32 = 10;

/// Hashes `password` with a fresh random salt.
///
/// No policy is applied to the input; an empty password still produces a hash.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `true` when `password` matches `hash`.
///
/// A hash that bcrypt cannot parse never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or_else(|e| {
        warn!(error = %e, "Stored password hash could not be verified");
        false
    })
}
