//! Session cookie policy and cookie builders.
//!
//! Both cookies share one attribute set: `HttpOnly`, `Path=/`, `SameSite=None`,
//! and `Secure` computed per request. The service runs behind a TLS-terminating
//! proxy, so the forwarded protocol header counts as HTTPS transport.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::{HeaderMap, Uri};
use time::Duration;

/// Cookie name for the general (OAuth-derived) user session.
pub const SESSION_COOKIE: &str = "session";

/// Cookie name for the password-login admin session.
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// General session lifetime in seconds (365 days).
pub const SESSION_MAX_AGE: i64 = 365 * 24 * 60 * 60;

/// Admin session lifetime in seconds (7 days). Also the admin token lifetime.
pub const ADMIN_SESSION_MAX_AGE: i64 = 7 * 24 * 60 * 60;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Whether the request reached the edge over HTTPS.
///
/// True when the request URI itself is `https`, or when any
/// `x-forwarded-proto` value lists `https` among its comma-separated entries
/// (case-insensitive, whitespace-trimmed).
pub fn is_secure_request(uri: &Uri, headers: &HeaderMap) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }
    headers
        .get_all(FORWARDED_PROTO)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

/// Attributes shared by every session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieOptions {
    pub http_only: bool,
    pub path: &'static str,
    pub same_site: SameSite,
    pub secure: bool,
}

impl CookieOptions {
    /// Compute the policy for one request.
    pub fn for_request(uri: &Uri, headers: &HeaderMap) -> Self {
        Self::with_secure(is_secure_request(uri, headers))
    }

    pub const fn with_secure(secure: bool) -> Self {
        Self {
            http_only: true,
            path: "/",
            same_site: SameSite::None,
            secure,
        }
    }

    fn cookie(self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .path(self.path)
            .http_only(self.http_only)
            .same_site(self.same_site)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }
}

/// Set the admin session cookie carrying a signed admin token.
///
/// ```
/// use axum_extra::extract::cookie::{CookieJar, SameSite};
/// use vinipim_auth_types::cookie::{set_admin_session_cookie, CookieOptions, ADMIN_SESSION_COOKIE};
///
/// let jar = set_admin_session_cookie(CookieJar::new(), "tok".to_string(), CookieOptions::with_secure(true));
/// let cookie = jar.get(ADMIN_SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "tok");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert_eq!(cookie.same_site(), Some(SameSite::None));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_admin_session_cookie(jar: CookieJar, token: String, options: CookieOptions) -> CookieJar {
    jar.add(options.cookie(
        ADMIN_SESSION_COOKIE,
        token,
        Duration::seconds(ADMIN_SESSION_MAX_AGE),
    ))
}

/// Clear the admin session cookie: same attributes, empty value, negative Max-Age.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use vinipim_auth_types::cookie::{clear_admin_session_cookie, CookieOptions, ADMIN_SESSION_COOKIE};
///
/// let jar = clear_admin_session_cookie(CookieJar::new(), CookieOptions::with_secure(false));
/// let cookie = jar.get(ADMIN_SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(-1)));
/// ```
pub fn clear_admin_session_cookie(jar: CookieJar, options: CookieOptions) -> CookieJar {
    jar.add(options.cookie(ADMIN_SESSION_COOKIE, String::new(), Duration::seconds(-1)))
}

/// Set the general session cookie issued by the OAuth callback.
pub fn set_session_cookie(jar: CookieJar, token: String, options: CookieOptions) -> CookieJar {
    jar.add(options.cookie(SESSION_COOKIE, token, Duration::seconds(SESSION_MAX_AGE)))
}

/// Clear the general session cookie.
pub fn clear_session_cookie(jar: CookieJar, options: CookieOptions) -> CookieJar {
    jar.add(options.cookie(SESSION_COOKIE, String::new(), Duration::seconds(-1)))
}
