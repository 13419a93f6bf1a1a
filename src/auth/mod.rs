pub mod jwt;
pub mod middleware;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::config::AdminCredentials;

pub const ADMIN_ROLE: &str = "admin";

/// The signed-in admin as shown to the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&AdminCredentials> for AdminUser {
    fn from(c: &AdminCredentials) -> Self {
        Self {
            email: c.email.clone(),
            name: c.name.clone(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

/// Compare a login attempt against the configured admin.
pub fn credentials_match(admin: &AdminCredentials, email: &str, password: &str) -> bool {
    let email_ok = admin.email.eq_ignore_ascii_case(email.trim());
    let password_ok = password_matches(admin, password);
    email_ok & password_ok
}

/// Constant-time check of a password against the configured admin password.
pub fn password_matches(admin: &AdminCredentials, password: &str) -> bool {
    use subtle::ConstantTimeEq;
    admin
        .password
        .as_bytes()
        .ct_eq(password.as_bytes())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminCredentials {
        AdminCredentials {
            email: "owner@honeyherbal.com".to_string(),
            password: "s3cret-pass".to_string(),
            name: "Owner".to_string(),
        }
    }

    #[test]
    fn password_must_match_exactly() {
        assert!(password_matches(&admin(), "s3cret-pass"));
        assert!(!password_matches(&admin(), "s3cret-pas"));
        assert!(!password_matches(&admin(), "s3cret-pass "));
        assert!(!password_matches(&admin(), ""));
    }

    #[test]
    fn login_accepts_email_in_any_case() {
        assert!(credentials_match(&admin(), " Owner@HoneyHerbal.com", "s3cret-pass"));
        assert!(!credentials_match(&admin(), "owner@honeyherbal.com", "wrong"));
        assert!(!credentials_match(&admin(), "someone@else.com", "s3cret-pass"));
    }
}
