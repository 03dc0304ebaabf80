use aerobook_core::models::User;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AuthConfig};

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserClaims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

/// Signs an HS256 token for `user` that expires after the configured lifetime.
pub fn issue_token(auth: &AuthConfig, user: &User) -> Result<String, AppError> {
    let claims = UserClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: (Utc::now() + Duration::seconds(auth.expiration as i64)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(auth.secret.as_bytes()))
        .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))
}

/// Verifies signature and expiry.
pub fn decode_token(auth: &AuthConfig, token: &str) -> Result<UserClaims, AppError> {
    decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::AuthenticationError("invalid token".to_string()))
}
