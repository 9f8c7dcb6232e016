//! Password-login admin accounts.

use chrono::{DateTime, Utc};

/// Stored admin credential.
///
/// Deliberately not `Serialize`: the digest must never leave the service.
/// Handlers expose [`AdminSummary`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Public view of an admin account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AdminSummary {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<&AdminCredential> for AdminSummary {
    fn from(admin: &AdminCredential) -> Self {
        Self {
            id: admin.id.clone(),
            email: admin.email.clone(),
            name: admin.name.clone(),
        }
    }
}
