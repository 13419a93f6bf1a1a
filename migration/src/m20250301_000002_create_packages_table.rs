use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `packages` table and its columns.
#[derive(DeriveIden)]
enum Packages {
    Table,
    Id,
    Title,
    Description,
    Discount,
    ValidUntil,
    ImageUrl,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::Title).string().not_null())
                    .col(ColumnDef::new(Packages::Description).text().not_null())
                    .col(ColumnDef::new(Packages::Discount).string().null())
                    .col(ColumnDef::new(Packages::ValidUntil).date().null())
                    .col(ColumnDef::new(Packages::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await
    }
}
