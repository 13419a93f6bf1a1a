use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `enquiries` table and its columns.
#[derive(DeriveIden)]
enum Enquiries {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Service,
    Message,
    Status,
    Notes,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enquiries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enquiries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Enquiries::Name).string().not_null())
                    .col(ColumnDef::new(Enquiries::Phone).string().not_null())
                    .col(ColumnDef::new(Enquiries::Email).string().null())
                    .col(ColumnDef::new(Enquiries::Service).string().not_null())
                    .col(ColumnDef::new(Enquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(Enquiries::Status)
                            .string()
                            .not_null()
                            .default("New"),
                    )
                    .col(ColumnDef::new(Enquiries::Notes).text().null())
                    .col(
                        ColumnDef::new(Enquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enquiries::Table).to_owned())
            .await
    }
}
