use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use vinipim_auth_types::password::{hash_password, verify_password};
use vinipim_auth_types::token::{AdminClaims, issue_admin_token, now_secs};
use vinipim_domain::admin::{AdminCredential, AdminSummary};

use crate::domain::repository::AdminRepository;
use crate::domain::types::{LoginInput, UpdateEmailInput, UpdatePasswordInput};
use crate::error::ApiError;

/// Look up a credential and check `password` against its digest.
///
/// `None` covers every failure: unknown email, wrong password and an
/// unavailable datastore all look the same to the caller. On success
/// `last_login` is stamped.
pub async fn verify_admin_login<A: AdminRepository>(
    admins: &A,
    email: &str,
    password: &str,
) -> Option<AdminCredential> {
    let mut admin = match admins.find_by_email(email).await {
        Ok(Some(admin)) => admin,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "admin lookup failed, treating login as no match");
            return None;
        }
    };

    if !verify_password(password, &admin.password_hash) {
        return None;
    }

    let now = Utc::now();
    if let Err(e) = admins.touch_last_login(&admin.id, now).await {
        warn!(admin_id = %admin.id, error = %e, "failed to record last login");
    }
    admin.last_login = Some(now);
    Some(admin)
}

/// Credential for `email`, or `None` when absent or the datastore is down.
pub async fn find_admin_by_email<A: AdminRepository>(
    admins: &A,
    email: &str,
) -> Option<AdminCredential> {
    match admins.find_by_email(email).await {
        Ok(admin) => admin,
        Err(e) => {
            warn!(error = %e, "admin lookup failed");
            None
        }
    }
}

// ── Login ─────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct AdminLoginOutput {
    pub admin: AdminSummary,
    pub token: String,
    pub claims: AdminClaims,
}

pub struct AdminLoginUseCase<A: AdminRepository> {
    pub admins: A,
    pub jwt_secret: String,
}

impl<A: AdminRepository> AdminLoginUseCase<A> {
    pub async fn execute(&self, input: LoginInput) -> Result<AdminLoginOutput, ApiError> {
        input.validate()?;

        let admin = verify_admin_login(&self.admins, &input.email, &input.password)
            .await
            .ok_or(ApiError::InvalidCredentials)?;

        let claims = AdminClaims::new(
            admin.id.clone(),
            admin.email.clone(),
            admin.name.clone(),
            now_secs(),
        );
        let token = issue_admin_token(&claims, &self.jwt_secret)
            .map_err(|e| ApiError::Internal(e.into()))?;

        info!(admin_id = %admin.id, "admin logged in");
        Ok(AdminLoginOutput {
            admin: AdminSummary::from(&admin),
            token,
            claims,
        })
    }
}

// ── UpdateEmail ───────────────────────────────────────────────────────────────

pub struct UpdateAdminEmailUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> UpdateAdminEmailUseCase<A> {
    pub async fn execute(&self, input: UpdateEmailInput) -> Result<(), ApiError> {
        input.validate()?;

        self.admins
            .update_email(&input.current_email, &input.new_email)
            .await
            .map_err(|e| {
                warn!(error = %e, "admin email update failed");
                ApiError::EmailUpdateFailed
            })
    }
}

// ── UpdatePassword ────────────────────────────────────────────────────────────

pub struct UpdateAdminPasswordUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> UpdateAdminPasswordUseCase<A> {
    pub async fn execute(&self, input: UpdatePasswordInput) -> Result<(), ApiError> {
        input.validate()?;

        let digest = hash_password(&input.new_password);
        self.admins
            .update_password_hash(&input.email, &digest)
            .await
            .map_err(|e| {
                warn!(error = %e, "admin password update failed");
                ApiError::PasswordUpdateFailed
            })
    }
}

// ── Provision ─────────────────────────────────────────────────────────────────

/// Create or reset an admin credential. Used by the `create-admin` binary.
pub struct ProvisionAdminUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> ProvisionAdminUseCase<A> {
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
    ) -> Result<AdminCredential, ApiError> {
        LoginInput {
            email: email.to_owned(),
            password: password.to_owned(),
        }
        .validate()?;

        let credential = AdminCredential {
            id: Uuid::new_v4().to_string(),
            email: email.to_owned(),
            password_hash: hash_password(password),
            name,
            created_at: Utc::now(),
            last_login: None,
        };
        self.admins.upsert(&credential).await
    }
}
