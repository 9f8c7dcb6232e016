//! Signed session tokens.
//!
//! Two token shapes share one HMAC secret:
//! - the admin token (`admin_session` cookie), issued on password login;
//! - the general session token (`session` cookie), issued by the OAuth callback.
//!
//! Neither is backed by a server-side session table. A token stays valid until
//! its `exp`, so logout only clears the cookie.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cookie::{ADMIN_SESSION_MAX_AGE, SESSION_MAX_AGE};

/// Errors returned by token verification and signing.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims carried by the admin token.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `admin_id` | `adminId` | admin credential id |
/// | `email` | `email` | admin email at issue time |
/// | `name` | `name` | display name, may be null |
/// | `iat` | `iat` | issued-at, seconds since epoch |
/// | `exp` | `exp` | `iat` + 7 days |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminClaims {
    pub admin_id: String,
    pub email: String,
    pub name: Option<String>,
    pub iat: u64,
    pub exp: u64,
}

impl AdminClaims {
    pub fn new(admin_id: String, email: String, name: Option<String>, issued_at: u64) -> Self {
        Self {
            admin_id,
            email,
            name,
            iat: issued_at,
            exp: issued_at + ADMIN_SESSION_MAX_AGE as u64,
        }
    }
}

/// Claims carried by the general session token. `sub` is the user's open id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub iat: u64,
    pub exp: u64,
}

impl SessionClaims {
    pub fn new(open_id: String, name: String, issued_at: u64) -> Self {
        Self {
            sub: open_id,
            name,
            iat: issued_at,
            exp: issued_at + SESSION_MAX_AGE as u64,
        }
    }
}

/// Current wall-clock time in seconds since the UNIX epoch.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Decode and validate a token.
///
/// HS256 only, `exp` required and checked with zero leeway: a token is
/// rejected as soon as its expiry has passed.
fn verify<T: DeserializeOwned>(
    token: &str,
    secret: &str,
    required: &[&str],
) -> Result<T, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(required);

    let data = decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

pub fn issue_admin_token(claims: &AdminClaims, secret: &str) -> Result<String, TokenError> {
    sign(claims, secret)
}

pub fn verify_admin_token(token: &str, secret: &str) -> Result<AdminClaims, TokenError> {
    verify(token, secret, &["exp"])
}

pub fn issue_session_token(claims: &SessionClaims, secret: &str) -> Result<String, TokenError> {
    sign(claims, secret)
}

pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    verify(token, secret, &["exp", "sub"])
}
