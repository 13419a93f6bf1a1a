use chrono::{DateTime, Utc};

use super::{ApiClient, ClientError};
use crate::auth::AdminUser;

/// Back-office login state. The token itself lives on the [`ApiClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    Unauthenticated,
    Authenticated {
        user: AdminUser,
        expires_at: DateTime<Utc>,
    },
}

impl AdminSession {
    pub fn is_authenticated(&self) -> bool {
        match self {
            Self::Authenticated { expires_at, .. } => *expires_at > Utc::now(),
            Self::Unauthenticated => false,
        }
    }

    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Unauthenticated => None,
        }
    }

    /// Log in and install the session token on `api`. A failed login leaves
    /// the state unchanged.
    pub async fn login(
        &mut self,
        api: &mut ApiClient,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let session = api.login(email, password).await?;
        api.set_token(Some(session.token));
        *self = Self::Authenticated {
            user: session.user,
            expires_at: session.expires_at,
        };
        Ok(())
    }

    /// Revoke the token server side and forget it locally. The local state is
    /// cleared even when the server call fails.
    pub async fn logout(&mut self, api: &mut ApiClient) -> Result<(), ClientError> {
        let result = if api.token().is_some() {
            api.logout().await
        } else {
            Ok(())
        };
        api.set_token(None);
        *self = Self::Unauthenticated;
        result
    }
}
