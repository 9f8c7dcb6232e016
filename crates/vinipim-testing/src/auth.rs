//! Mock auth helpers for integration tests.
//!
//! Real requests authenticate with the `admin_session` and `session` cookies.
//! `MockAuth` signs those tokens with a known secret so tests can attach them
//! directly, without going through `admin.login` or the OAuth callback.

use http::HeaderValue;
use vinipim_auth_types::cookie::{ADMIN_SESSION_COOKIE, SESSION_COOKIE};
use vinipim_auth_types::token::{
    AdminClaims, SessionClaims, issue_admin_token, issue_session_token, now_secs,
};

/// Secret shared between `MockAuth` and the app state built in tests.
pub const TEST_JWT_SECRET: &str = "vinipim-test-secret";

pub struct MockAuth {
    secret: String,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new(TEST_JWT_SECRET)
    }
}

impl MockAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_owned(),
        }
    }

    /// Admin token issued `age_secs` ago.
    pub fn admin_token_aged(&self, admin_id: &str, email: &str, age_secs: u64) -> String {
        let claims = AdminClaims::new(
            admin_id.to_owned(),
            email.to_owned(),
            Some("Admin".to_owned()),
            now_secs() - age_secs,
        );
        issue_admin_token(&claims, &self.secret).unwrap()
    }

    pub fn admin_token(&self, admin_id: &str, email: &str) -> String {
        self.admin_token_aged(admin_id, email, 0)
    }

    pub fn session_token(&self, open_id: &str, name: &str) -> String {
        let claims = SessionClaims::new(open_id.to_owned(), name.to_owned(), now_secs());
        issue_session_token(&claims, &self.secret).unwrap()
    }

    /// `Cookie` header value carrying a fresh admin token.
    pub fn admin_cookie(&self, admin_id: &str, email: &str) -> HeaderValue {
        cookie_header(&[(ADMIN_SESSION_COOKIE, &self.admin_token(admin_id, email))])
    }

    /// `Cookie` header value carrying a general session token for `open_id`.
    pub fn session_cookie(&self, open_id: &str) -> HeaderValue {
        cookie_header(&[(SESSION_COOKIE, &self.session_token(open_id, "Test User"))])
    }
}

/// Join `name=value` pairs into a single `Cookie` header value.
pub fn cookie_header(pairs: &[(&str, &str)]) -> HeaderValue {
    let joined = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");
    HeaderValue::from_str(&joined).unwrap()
}
