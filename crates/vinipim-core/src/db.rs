//! Datastore acquisition.
//!
//! The connection is opened once at startup and handed to every repository
//! through [`Datastore`]. When it cannot be opened the service still starts;
//! repositories then see [`StoreError::Unavailable`] and degrade per call site.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("datastore not available")]
    Unavailable,
    #[error(transparent)]
    Query(#[from] DbErr),
}

/// Bounded, fixed-delay retry for the initial connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    pub connect_timeout: Duration,
    /// Only production retries; elsewhere a single attempt is made.
    pub retry_enabled: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(10),
            retry_enabled: false,
        }
    }
}

impl RetryPolicy {
    pub fn attempts(&self) -> u32 {
        if self.retry_enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }
}

/// Run `op` until it succeeds or the policy's attempts are spent, sleeping
/// `policy.delay` between failures. `op` receives the 1-based attempt number.
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max = policy.attempts();
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max => {
                ::tracing::warn!(attempt, max, error = %e, "datastore connection failed, retrying");
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Process-wide datastore handle. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Datastore {
    conn: Option<DatabaseConnection>,
}

impl Datastore {
    pub fn unavailable() -> Self {
        Self { conn: None }
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn: Some(conn) }
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    pub fn connection(&self) -> Result<&DatabaseConnection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Round-trip to the server. False when unavailable or the ping fails.
    pub async fn ping(&self) -> bool {
        match &self.conn {
            Some(conn) => conn.ping().await.is_ok(),
            None => false,
        }
    }
}

/// Open the datastore at `url` under `policy`.
///
/// Never fails: a missing URL or exhausted retries yield an unavailable
/// [`Datastore`].
pub async fn connect_with_retry(url: Option<&str>, policy: &RetryPolicy) -> Datastore {
    let Some(url) = url else {
        ::tracing::warn!("DATABASE_URL not set, starting without a datastore");
        return Datastore::unavailable();
    };

    let result = with_retry(policy, |attempt| {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .connect_timeout(policy.connect_timeout)
            .sqlx_logging(false);
        ::tracing::info!(attempt, max = policy.attempts(), "connecting to datastore");
        Database::connect(options)
    })
    .await;

    match result {
        Ok(conn) => {
            ::tracing::info!("datastore connected");
            Datastore::from_connection(conn)
        }
        Err(e) => {
            ::tracing::error!(error = %e, "datastore unavailable, continuing without it");
            Datastore::unavailable()
        }
    }
}
