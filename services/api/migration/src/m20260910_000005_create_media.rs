use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::Filename).text().not_null())
                    .col(
                        ColumnDef::new(Media::FileType)
                            .string_len(16)
                            .not_null()
                            .default("image"),
                    )
                    .col(ColumnDef::new(Media::ContentType).string_len(255).not_null())
                    .col(ColumnDef::new(Media::Size).integer().not_null().default(0))
                    .col(ColumnDef::new(Media::StorageKey).text().not_null())
                    .col(ColumnDef::new(Media::Url).text().not_null())
                    .col(ColumnDef::new(Media::Thumbnail).text())
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Media::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Media::UserId).string_len(64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    Filename,
    FileType,
    ContentType,
    Size,
    StorageKey,
    Url,
    Thumbnail,
    CreatedAt,
    UpdatedAt,
    UserId,
}
