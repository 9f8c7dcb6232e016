use tracing::{debug, warn};

use vinipim_auth_types::token::{AdminClaims, verify_admin_token, verify_session_token};
use vinipim_domain::user::User;

use crate::domain::repository::UserRepository;

/// Outcome of resolving the general session cookie.
///
/// Callers that only need the acting user use [`Resolution::into_user`],
/// which treats a provider failure like a missing session.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Authenticated(User),
    Unauthenticated,
    ProviderError(String),
}

impl Resolution {
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated | Self::ProviderError(_) => None,
        }
    }
}

/// Resolve the `session` cookie to a stored user.
pub struct ResolveUserUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> ResolveUserUseCase<U> {
    pub async fn execute(&self, session_token: Option<&str>) -> Resolution {
        let Some(token) = session_token.filter(|t| !t.is_empty()) else {
            return Resolution::Unauthenticated;
        };

        let claims = match verify_session_token(token, &self.jwt_secret) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "rejected session token");
                return Resolution::Unauthenticated;
            }
        };

        // TODO: bound this lookup with a timeout; a hung datastore call stalls
        // every request that carries a session cookie.
        match self.users.find_by_id(&claims.sub).await {
            Ok(Some(user)) => Resolution::Authenticated(user),
            Ok(None) => Resolution::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "user resolution failed, treating request as anonymous");
                Resolution::ProviderError(e.to_string())
            }
        }
    }
}

/// Verified claims from the `admin_session` cookie.
///
/// Absent, malformed, expired and forged tokens all yield `None`.
pub fn admin_claims_from(token: Option<&str>, jwt_secret: &str) -> Option<AdminClaims> {
    let token = token.filter(|t| !t.is_empty())?;
    match verify_admin_token(token, jwt_secret) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!(error = %e, "rejected admin token");
            None
        }
    }
}
