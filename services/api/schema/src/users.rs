use sea_orm::entity::prelude::*;

/// OAuth-derived user. `id` is the provider's open id.
/// Upserted on every successful OAuth callback.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    /// `user` or `admin`.
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_signed_in: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
