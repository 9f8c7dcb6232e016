pub use sea_orm_migration::prelude::*;

mod m20260910_000001_create_users;
mod m20260910_000002_create_admin_credentials;
mod m20260910_000003_create_posts;
mod m20260910_000004_create_reviews;
mod m20260910_000005_create_media;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260910_000001_create_users::Migration),
            Box::new(m20260910_000002_create_admin_credentials::Migration),
            Box::new(m20260910_000003_create_posts::Migration),
            Box::new(m20260910_000004_create_reviews::Migration),
            Box::new(m20260910_000005_create_media::Migration),
        ]
    }
}
