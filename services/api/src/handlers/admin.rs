use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use tracing::{info, warn};

use vinipim_auth_types::cookie::{
    ADMIN_SESSION_COOKIE, clear_admin_session_cookie, set_admin_session_cookie,
};
use vinipim_auth_types::token::AdminClaims;
use vinipim_domain::admin::AdminSummary;

use crate::domain::repository::Repositories;
use crate::domain::types::{LoginInput, UpdateEmailInput, UpdatePasswordInput};
use crate::error::ApiError;
use crate::extract::{AdminSession, CookiePolicy, Input};
use crate::handlers::success;
use crate::state::AppState;
use crate::usecase::admin::{AdminLoginUseCase, UpdateAdminEmailUseCase, UpdateAdminPasswordUseCase};
use crate::usecase::session::admin_claims_from;

// ── POST admin.login ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub admin: AdminSummary,
}

pub async fn login<R: Repositories>(
    State(state): State<AppState<R>>,
    CookiePolicy(options): CookiePolicy,
    jar: CookieJar,
    Input(input): Input<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = AdminLoginUseCase {
        admins: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase.execute(input).await?;

    let jar = set_admin_session_cookie(jar, output.token, options);
    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            admin: output.admin,
        }),
    ))
}

// ── GET admin.me ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMe {
    pub admin_id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<AdminClaims> for AdminMe {
    fn from(claims: AdminClaims) -> Self {
        Self {
            admin_id: claims.admin_id,
            email: claims.email,
            name: claims.name,
        }
    }
}

/// Decoded admin claims, or `null` without a valid admin cookie.
pub async fn me<R: Repositories>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
) -> Json<Option<AdminMe>> {
    let claims = admin_claims_from(
        jar.get(ADMIN_SESSION_COOKIE).map(|c| c.value()),
        &state.jwt_secret,
    );
    Json(claims.map(AdminMe::from))
}

// ── POST admin.logout ─────────────────────────────────────────────────────────

pub async fn logout(CookiePolicy(options): CookiePolicy, jar: CookieJar) -> impl IntoResponse {
    (clear_admin_session_cookie(jar, options), success())
}

// ── POST admin.updateEmail ────────────────────────────────────────────────────

pub async fn update_email<R: Repositories>(
    State(state): State<AppState<R>>,
    AdminSession(claims): AdminSession,
    Input(input): Input<UpdateEmailInput>,
) -> Result<impl IntoResponse, ApiError> {
    if claims.email != input.current_email {
        warn!(admin_id = %claims.admin_id, "admin is changing another account's email");
    }

    UpdateAdminEmailUseCase {
        admins: state.admin_repo(),
    }
    .execute(input)
    .await?;

    info!(admin_id = %claims.admin_id, "admin email updated");
    Ok(success())
}

// ── POST admin.updatePassword ─────────────────────────────────────────────────

pub async fn update_password<R: Repositories>(
    State(state): State<AppState<R>>,
    AdminSession(claims): AdminSession,
    Input(input): Input<UpdatePasswordInput>,
) -> Result<impl IntoResponse, ApiError> {
    if claims.email != input.email {
        warn!(admin_id = %claims.admin_id, "admin is changing another account's password");
    }

    UpdateAdminPasswordUseCase {
        admins: state.admin_repo(),
    }
    .execute(input)
    .await?;

    info!(admin_id = %claims.admin_id, "admin password updated");
    Ok(success())
}
