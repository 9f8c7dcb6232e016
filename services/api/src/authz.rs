//! Authorization principal and procedure tiers.
//!
//! A request may carry two independent credentials: the `session` cookie,
//! resolved to an OAuth-derived [`User`], and the `admin_session` cookie,
//! verified to [`AdminClaims`]. Both collapse into a single [`Principal`] so
//! every tier asks one question, [`Principal::is_admin`].
//!
//! Precedence when both are present: an OAuth user with role `admin` wins;
//! otherwise a verified admin token elevates the request to
//! [`Principal::PasswordAdmin`].

use vinipim_auth_types::token::AdminClaims;
use vinipim_domain::user::User;

use crate::error::ApiError;

/// Acting identity of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    /// Signed-in OAuth user without the admin role.
    Member(User),
    /// Signed-in OAuth user with role `admin`.
    OAuthAdmin(User),
    /// Password-login admin holding a verified admin token.
    PasswordAdmin(AdminClaims),
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::OAuthAdmin(_) | Self::PasswordAdmin(_))
    }

    /// User id, or admin credential id for password admins.
    pub fn id(&self) -> &str {
        match self {
            Self::Member(user) | Self::OAuthAdmin(user) => &user.id,
            Self::PasswordAdmin(claims) => &claims.admin_id,
        }
    }
}

/// Credentials resolved from one request's cookies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    pub user: Option<User>,
    pub admin: Option<AdminClaims>,
}

impl RequestContext {
    pub fn principal(&self) -> Option<Principal> {
        match (&self.user, &self.admin) {
            (Some(user), _) if user.is_admin() => Some(Principal::OAuthAdmin(user.clone())),
            (_, Some(claims)) => Some(Principal::PasswordAdmin(claims.clone())),
            (Some(user), None) => Some(Principal::Member(user.clone())),
            (None, None) => None,
        }
    }
}

/// Precondition level gating a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Public,
    Protected,
    Admin,
}

/// Check `ctx` against `tier`.
///
/// `Public` never fails and yields whatever principal exists. `Protected`
/// fails with `UNAUTHORIZED` when there is none. `Admin` additionally fails
/// with `FORBIDDEN` for non-admin principals.
pub fn authorize(tier: Tier, ctx: &RequestContext) -> Result<Option<Principal>, ApiError> {
    let principal = ctx.principal();
    match tier {
        Tier::Public => Ok(principal),
        Tier::Protected => principal.map(Some).ok_or(ApiError::Unauthorized),
        Tier::Admin => match principal {
            None => Err(ApiError::NotAdmin),
            Some(p) if !p.is_admin() => Err(ApiError::NotAdmin),
            Some(p) => Ok(Some(p)),
        },
    }
}

/// Inline role check used by content-authoring mutations.
pub fn require_admin(principal: &Principal) -> Result<(), ApiError> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(ApiError::AdminRequired)
    }
}
