use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::Type).string_len(16).not_null())
                    .col(ColumnDef::new(Reviews::Title).text().not_null())
                    .col(ColumnDef::new(Reviews::Creator).text())
                    .col(ColumnDef::new(Reviews::Year).integer())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Notes).text())
                    .col(ColumnDef::new(Reviews::Tags).json_binary())
                    .col(ColumnDef::new(Reviews::CoverImage).text())
                    .col(ColumnDef::new(Reviews::ApiId).string_len(255))
                    .col(ColumnDef::new(Reviews::Metadata).json_binary())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Reviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Reviews::UserId).string_len(64))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::Type)
                    .name("idx_reviews_type")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    Type,
    Title,
    Creator,
    Year,
    Rating,
    Notes,
    Tags,
    CoverImage,
    ApiId,
    Metadata,
    CreatedAt,
    UpdatedAt,
    UserId,
}
