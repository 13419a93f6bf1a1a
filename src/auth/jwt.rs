use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::AdminUser;

/// Claims carried by an admin session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Admin email.
    pub sub: String,
    /// Display name.
    pub name: String,
    pub role: String,
    /// Token id, used for revocation on logout.
    pub jti: String,
    /// Issued-at (Unix timestamp).
    pub iat: usize,
    /// Expiration (Unix timestamp).
    pub exp: usize,
}

impl Claims {
    pub fn new(user: &AdminUser, ttl: Duration) -> Self {
        let now = Utc::now().timestamp() as usize;
        Self {
            sub: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + ttl.as_secs() as usize,
        }
    }

    pub fn user(&self) -> AdminUser {
        AdminUser {
            email: self.sub.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Sign claims with HS256.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {e}"))
}

/// Validate an HS256 session token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|td| td.claims)
        .map_err(|e| format!("Token validation failed: {e}"))
}
