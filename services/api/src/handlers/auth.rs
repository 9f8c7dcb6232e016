use axum::{Json, response::IntoResponse};
use axum_extra::extract::CookieJar;

use vinipim_auth_types::cookie::clear_session_cookie;
use vinipim_domain::user::User;

use crate::extract::{Context, CookiePolicy};
use crate::handlers::success;

/// The user behind the `session` cookie, or `null`.
pub async fn me(Context(ctx): Context) -> Json<Option<User>> {
    Json(ctx.user)
}

pub async fn logout(CookiePolicy(options): CookiePolicy, jar: CookieJar) -> impl IntoResponse {
    (clear_session_cookie(jar, options), success())
}
