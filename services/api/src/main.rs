use anyhow::Context;
use tracing::info;

use vinipim_api::config::ApiConfig;
use vinipim_api::infra::db::DbRepositories;
use vinipim_api::infra::oauth::OAuthClient;
use vinipim_api::infra::storage::StorageClient;
use vinipim_api::router::build_router;
use vinipim_api::state::AppState;
use vinipim_core::db::connect_with_retry;
use vinipim_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let store = connect_with_retry(config.database_url.as_deref(), &config.retry).await;
    if !store.is_available() {
        info!("starting without a datastore; content reads degrade and mutations fail");
    }

    let state = AppState {
        repos: DbRepositories { store },
        jwt_secret: config.jwt_secret.clone(),
        owner_open_id: config.owner_open_id.clone(),
        oauth: OAuthClient::new(config.oauth_server_url.clone()),
        storage: StorageClient::new(config.forge_api_url.clone(), config.forge_api_key.clone()),
    };

    let router = build_router(state);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(env = %config.app_env, "api listening on {addr}");
    axum::serve(listener, router).await.context("server error")
}
