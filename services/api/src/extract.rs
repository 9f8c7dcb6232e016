//! Request extractors: procedure tiers, cookie policy and typed input.
//!
//! Tier extractors reject before the handler body runs, so a procedure can
//! never execute without its tier's precondition holding.

use std::future::Future;

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use vinipim_auth_types::cookie::{ADMIN_SESSION_COOKIE, CookieOptions, SESSION_COOKIE};
use vinipim_auth_types::token::AdminClaims;

use crate::authz::{Principal, RequestContext, Tier, authorize};
use crate::domain::repository::Repositories;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::session::{ResolveUserUseCase, admin_claims_from};

fn resolve_context<R: Repositories>(
    parts: &Parts,
    state: &AppState<R>,
) -> impl Future<Output = RequestContext> + Send + use<R> {
    let jar = CookieJar::from_headers(&parts.headers);
    let session = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned());
    let admin = admin_claims_from(
        jar.get(ADMIN_SESSION_COOKIE).map(|c| c.value()),
        &state.jwt_secret,
    );
    let usecase = ResolveUserUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };

    async move {
        let user = usecase.execute(session.as_deref()).await.into_user();
        RequestContext { user, admin }
    }
}

/// Public tier. Carries whatever credentials the request presented.
#[derive(Debug, Clone)]
pub struct Context(pub RequestContext);

impl<R: Repositories> FromRequestParts<AppState<R>> for Context {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let ctx = resolve_context(parts, state);
        async move { Ok(Context(ctx.await)) }
    }
}

/// Protected tier: any principal. `UNAUTHORIZED` otherwise.
#[derive(Debug, Clone)]
pub struct Protected(pub Principal);

impl<R: Repositories> FromRequestParts<AppState<R>> for Protected {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let ctx = resolve_context(parts, state);
        async move {
            authorize(Tier::Protected, &ctx.await)?
                .map(Protected)
                .ok_or(ApiError::Unauthorized)
        }
    }
}

/// Admin tier: an admin principal. `FORBIDDEN` otherwise.
#[derive(Debug, Clone)]
pub struct AdminOnly(pub Principal);

impl<R: Repositories> FromRequestParts<AppState<R>> for AdminOnly {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let ctx = resolve_context(parts, state);
        async move {
            authorize(Tier::Admin, &ctx.await)?
                .map(AdminOnly)
                .ok_or(ApiError::NotAdmin)
        }
    }
}

/// A verified `admin_session` token. `UNAUTHORIZED` otherwise.
///
/// Gates credential updates. The claims are not matched against the account
/// being changed.
#[derive(Debug, Clone)]
pub struct AdminSession(pub AdminClaims);

impl<R: Repositories> FromRequestParts<AppState<R>> for AdminSession {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let result = admin_claims_from(
            jar.get(ADMIN_SESSION_COOKIE).map(|c| c.value()),
            &state.jwt_secret,
        )
        .map(AdminSession)
        .ok_or(ApiError::Unauthorized);
        async move { result }
    }
}

/// Cookie attributes for this request's transport.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy(pub CookieOptions);

impl<S: Send + Sync> FromRequestParts<S> for CookiePolicy {
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let options = CookieOptions::for_request(&parts.uri, &parts.headers);
        async move { Ok(CookiePolicy(options)) }
    }
}

/// JSON mutation input. Malformed bodies are `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Input<T>(pub T);

/// Query-string input for GET procedures. Malformed queries are `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryInput<T>(pub T);
