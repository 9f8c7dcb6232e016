use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use vinipim_auth_types::cookie::set_session_cookie;

use crate::domain::repository::Repositories;
use crate::extract::CookiePolicy;
use crate::state::AppState;
use crate::usecase::oauth::{OAuthCallbackUseCase, OAuthError};

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// ── GET /api/oauth/callback ───────────────────────────────────────────────────

pub async fn callback<R: Repositories>(
    State(state): State<AppState<R>>,
    CookiePolicy(options): CookiePolicy,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(code), Some(oauth_state)) = (non_empty(query.code), non_empty(query.state)) else {
        return error_body(StatusCode::BAD_REQUEST, "code and state are required");
    };

    let usecase = OAuthCallbackUseCase {
        users: state.user_repo(),
        provider: state.oauth.clone(),
        jwt_secret: state.jwt_secret.clone(),
        owner_open_id: state.owner_open_id.clone(),
    };

    match usecase.execute(&code, &oauth_state).await {
        Ok(output) => {
            let jar = set_session_cookie(jar, output.session_token, options);
            (StatusCode::FOUND, jar, [(header::LOCATION, "/")]).into_response()
        }
        Err(OAuthError::MissingOpenId) => {
            warn!("OAuth user info carried no openId");
            error_body(StatusCode::BAD_REQUEST, "openId missing from user info")
        }
        Err(e) => {
            error!(error = %e, "OAuth callback failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "OAuth callback failed")
        }
    }
}
