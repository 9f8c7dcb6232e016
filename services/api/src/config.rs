use std::time::Duration;

use vinipim_core::config::{ConfigError, optional, parse_or, required};
use vinipim_core::db::RetryPolicy;

/// API service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Datastore URL. Unset means the service runs without a datastore.
    pub database_url: Option<String>,
    /// HMAC secret for admin and session tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Open id promoted to `admin` on user upsert. Env var: `OWNER_OPEN_ID`.
    pub owner_open_id: String,
    /// Base URL of the OAuth provider. Env var: `OAUTH_SERVER_URL`.
    pub oauth_server_url: Option<String>,
    /// Storage proxy base URL. Env var: `BUILT_IN_FORGE_API_URL`.
    pub forge_api_url: Option<String>,
    /// Storage proxy key. Env var: `BUILT_IN_FORGE_API_KEY`.
    pub forge_api_key: Option<String>,
    /// `production` enables connection retry. Env var: `APP_ENV`.
    pub app_env: String,
    pub host: String,
    pub port: u16,
    pub retry: RetryPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env = optional("APP_ENV").unwrap_or_else(|| "development".to_owned());
        let defaults = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: parse_or("DB_MAX_ATTEMPTS", defaults.max_attempts)?,
            delay: Duration::from_secs(parse_or(
                "DB_RETRY_DELAY_SECS",
                defaults.delay.as_secs(),
            )?),
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            retry_enabled: app_env == "production",
        };

        Ok(Self {
            database_url: optional("DATABASE_URL"),
            jwt_secret: required("JWT_SECRET")?,
            owner_open_id: optional("OWNER_OPEN_ID").unwrap_or_default(),
            oauth_server_url: optional("OAUTH_SERVER_URL"),
            forge_api_url: optional("BUILT_IN_FORGE_API_URL"),
            forge_api_key: optional("BUILT_IN_FORGE_API_KEY"),
            app_env,
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port: parse_or("PORT", 3000)?,
            retry,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
