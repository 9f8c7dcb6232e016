use std::future::Future;

use chrono::Utc;
use tracing::info;

use vinipim_auth_types::token::{SessionClaims, issue_session_token, now_secs};
use vinipim_domain::user::{User, UserRole};

use crate::domain::repository::UserRepository;
use crate::domain::types::{OAuthUserInfo, UpsertUser};
use crate::error::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("OAuth provider not configured")]
    NotConfigured,
    #[error("OAuth provider request failed")]
    Transport(#[source] anyhow::Error),
    #[error("OAuth provider returned status {0}")]
    Status(u16),
    #[error("openId missing from user info")]
    MissingOpenId,
    #[error("failed to persist user")]
    Store(#[source] ApiError),
    #[error("failed to sign session token")]
    Token(#[source] vinipim_auth_types::token::TokenError),
}

/// External OAuth provider: code exchange and user-info lookup.
pub trait OAuthProvider: Send + Sync {
    /// Exchange an authorization code for an access token.
    fn exchange_code(
        &self,
        code: &str,
        state: &str,
    ) -> impl Future<Output = Result<String, OAuthError>> + Send;

    fn user_info(
        &self,
        access_token: &str,
    ) -> impl Future<Output = Result<OAuthUserInfo, OAuthError>> + Send;
}

#[derive(Debug)]
pub struct OAuthCallbackOutput {
    pub user: User,
    pub session_token: String,
}

pub struct OAuthCallbackUseCase<U: UserRepository, P: OAuthProvider> {
    pub users: U,
    pub provider: P,
    pub jwt_secret: String,
    pub owner_open_id: String,
}

impl<U: UserRepository, P: OAuthProvider> OAuthCallbackUseCase<U, P> {
    pub async fn execute(&self, code: &str, state: &str) -> Result<OAuthCallbackOutput, OAuthError> {
        let access_token = self.provider.exchange_code(code, state).await?;
        let info = self.provider.user_info(&access_token).await?;

        let open_id = info
            .open_id
            .filter(|id| !id.is_empty())
            .ok_or(OAuthError::MissingOpenId)?;

        let role = (!self.owner_open_id.is_empty() && open_id == self.owner_open_id)
            .then_some(UserRole::Admin);

        let user = self
            .users
            .upsert(&UpsertUser {
                open_id: open_id.clone(),
                name: info.name.clone(),
                email: info.email,
                login_method: info.login_method.or(info.platform),
                role,
                last_signed_in: Utc::now(),
            })
            .await
            .map_err(OAuthError::Store)?;

        let claims = SessionClaims::new(open_id, info.name.unwrap_or_default(), now_secs());
        let session_token =
            issue_session_token(&claims, &self.jwt_secret).map_err(OAuthError::Token)?;

        info!(user_id = %user.id, role = %user.role, "user signed in via OAuth");
        Ok(OAuthCallbackOutput {
            user,
            session_token,
        })
    }
}
