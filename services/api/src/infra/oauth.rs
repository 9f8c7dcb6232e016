use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::types::OAuthUserInfo;
use crate::usecase::oauth::{OAuthError, OAuthProvider};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    code: &'a str,
    state: &'a str,
    grant_type: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// HTTP client for the external OAuth provider at `OAUTH_SERVER_URL`.
///
/// Without a base URL every call fails with [`OAuthError::NotConfigured`].
#[derive(Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl OAuthClient {
    pub fn new(base_url: Option<String>) -> Self {
        if base_url.is_none() {
            warn!("OAUTH_SERVER_URL not set, OAuth callback will fail");
        }
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.map(|url| url.trim_end_matches('/').to_owned()),
        }
    }

    fn endpoint(&self, path: &str) -> Result<String, OAuthError> {
        let base = self.base_url.as_deref().ok_or(OAuthError::NotConfigured)?;
        Ok(format!("{base}{path}"))
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OAuthError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(OAuthError::Status(status.as_u16()))
    }
}

impl OAuthProvider for OAuthClient {
    async fn exchange_code(&self, code: &str, state: &str) -> Result<String, OAuthError> {
        let url = self.endpoint("/oauth/token")?;
        let response = self
            .http
            .post(url)
            .json(&TokenRequest {
                code,
                state,
                grant_type: "authorization_code",
            })
            .send()
            .await
            .map_err(|e| OAuthError::Transport(e.into()))?;

        let body: TokenResponse = check_status(response)?
            .json()
            .await
            .map_err(|e| OAuthError::Transport(e.into()))?;
        Ok(body.access_token)
    }

    async fn user_info(&self, access_token: &str) -> Result<OAuthUserInfo, OAuthError> {
        let url = self.endpoint("/oauth/userinfo")?;
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| OAuthError::Transport(e.into()))?;

        check_status(response)?
            .json()
            .await
            .map_err(|e| OAuthError::Transport(e.into()))
    }
}
