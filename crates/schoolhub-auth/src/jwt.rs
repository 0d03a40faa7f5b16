//! Access token creation and verification.
//!
//! Tokens are HS256 JWTs signed with `JWT_SECRET`. Each token binds the
//! principal id (`sub`) and display name (`name`) and expires
//! `JwtConfig::token_expiry` seconds after issue. Expiry is enforced by the
//! standard `exp` validation in [`jsonwebtoken`].

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use schoolhub_config::JwtConfig;
use schoolhub_core::AppError;

use crate::claims::Claims;

/// Creates an access token for the principal `subject_id`.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    subject_id: Uuid,
    subject_name: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let lifetime = usize::try_from(jwt_config.token_expiry).unwrap_or(0);
    let exp = now.saturating_add(lifetime);

    let claims = Claims {
        sub: subject_id.to_string(),
        name: subject_name.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid token".to_string()))
}
