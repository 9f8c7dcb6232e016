use sea_orm::entity::prelude::*;

/// Film, album or book review. `rating` is 1..=5.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub title: String,
    pub creator: Option<String>,
    pub year: Option<i32>,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub tags: Option<Json>,
    pub cover_image: Option<String>,
    pub api_id: Option<String>,
    pub metadata: Option<Json>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub user_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
