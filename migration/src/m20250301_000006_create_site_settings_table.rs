use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the singleton `site_settings` table.
#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    BusinessName,
    Phone,
    Whatsapp,
    Email,
    Address,
    WorkingHours,
    HeroTagline,
    AboutText,
    FacebookUrl,
    InstagramUrl,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteSettings::BusinessName).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Phone).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Whatsapp).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Email).string().not_null())
                    .col(ColumnDef::new(SiteSettings::Address).text().not_null())
                    .col(ColumnDef::new(SiteSettings::WorkingHours).string().not_null())
                    .col(ColumnDef::new(SiteSettings::HeroTagline).string().not_null())
                    .col(ColumnDef::new(SiteSettings::AboutText).text().not_null())
                    .col(ColumnDef::new(SiteSettings::FacebookUrl).string().null())
                    .col(ColumnDef::new(SiteSettings::InstagramUrl).string().null())
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}
