use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::AdminUser;
use super::jwt::{self, Claims};
use crate::error::ApiError;

/// A freshly issued admin session, as returned by `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AdminUser,
}

/// Issues and verifies admin session tokens.
///
/// Tokens are self-contained JWTs; logout records the token id in a revocation
/// cache that keeps entries exactly as long as a token can live.
#[derive(Clone)]
pub struct SessionStore {
    secret: String,
    ttl: Duration,
    revoked: Cache<String, ()>,
}

impl SessionStore {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // Unbounded: evicting a revoked id early would revive its token.
        // Entries expire with the tokens they block.
        let revoked = Cache::builder().time_to_live(ttl).build();

        Self {
            secret: secret.to_string(),
            ttl,
            revoked,
        }
    }

    pub fn issue(&self, user: AdminUser) -> Result<IssuedSession, ApiError> {
        let claims = Claims::new(&user, self.ttl);
        let token = jwt::issue_token(&claims, &self.secret).map_err(ApiError::Store)?;
        let expires_at = DateTime::from_timestamp(claims.exp as i64, 0).unwrap_or_else(Utc::now);

        Ok(IssuedSession {
            token,
            expires_at,
            user,
        })
    }

    pub async fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let claims = jwt::validate_token(token, &self.secret).map_err(|e| {
            tracing::debug!("rejected session token: {e}");
            ApiError::unauthorized("Invalid or expired session")
        })?;

        if self.revoked.contains_key(&claims.jti) {
            return Err(ApiError::unauthorized("Session has been logged out"));
        }

        Ok(claims)
    }

    pub async fn revoke(&self, claims: &Claims) {
        self.revoked.insert(claims.jti.clone(), ()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        AdminUser {
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[tokio::test]
    async fn issued_token_verifies_until_revoked() {
        let store = SessionStore::new("unit-test-secret", Duration::from_secs(60));
        let session = store.issue(admin()).unwrap();

        let claims = store.verify(&session.token).await.unwrap();
        assert_eq!(claims.user(), admin());

        store.revoke(&claims).await;
        assert!(matches!(
            store.verify(&session.token).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn token_from_another_secret_is_rejected() {
        let ours = SessionStore::new("secret-a", Duration::from_secs(60));
        let theirs = SessionStore::new("secret-b", Duration::from_secs(60));
        let session = theirs.issue(admin()).unwrap();

        assert!(ours.verify(&session.token).await.is_err());
    }

    #[tokio::test]
    async fn revocation_survives_many_later_logouts() {
        let store = SessionStore::new("unit-test-secret", Duration::from_secs(600));
        let session = store.issue(admin()).unwrap();
        let claims = store.verify(&session.token).await.unwrap();
        store.revoke(&claims).await;

        for _ in 0..12_000 {
            store
                .revoke(&Claims::new(&admin(), Duration::from_secs(600)))
                .await;
        }
        store.revoked.run_pending_tasks().await;

        assert!(store.verify(&session.token).await.is_err());
    }
}
