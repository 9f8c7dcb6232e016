//! Create or reset a password-login admin account.
//!
//! ```text
//! create-admin --email owner@example.com --password '...' --name Owner
//! ```
//!
//! Every flag also reads from the environment (`ADMIN_EMAIL`,
//! `ADMIN_PASSWORD`, `ADMIN_NAME`). Running it again for the same email
//! replaces the stored password.

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;

use vinipim_api::domain::repository::Repositories;
use vinipim_api::infra::db::DbRepositories;
use vinipim_api::usecase::admin::{ProvisionAdminUseCase, find_admin_by_email};
use vinipim_core::config::required;
use vinipim_core::db::{RetryPolicy, connect_with_retry};
use vinipim_core::tracing::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "create-admin", about = "Create or reset an admin credential")]
struct Args {
    #[arg(long, env = "ADMIN_EMAIL")]
    email: String,

    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "ADMIN_NAME")]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let args = Args::parse();
    let database_url = required("DATABASE_URL")?;

    let store = connect_with_retry(Some(&database_url), &RetryPolicy::default()).await;
    if !store.is_available() {
        bail!("datastore unavailable");
    }
    let repos = DbRepositories { store };

    let existed = find_admin_by_email(&repos.admins(), &args.email)
        .await
        .is_some();

    let admin = ProvisionAdminUseCase {
        admins: repos.admins(),
    }
    .execute(&args.email, &args.password, args.name)
    .await
    .context("failed to provision admin")?;

    if existed {
        info!(admin_id = %admin.id, email = %admin.email, "admin password reset");
    } else {
        info!(admin_id = %admin.id, email = %admin.email, "admin created");
    }
    Ok(())
}
