use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum GalleryItems {
    Table,
    Category,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Enquiries {
    Table,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Category,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Public gallery page filters by category, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_gallery_items_category_created_at")
                    .table(GalleryItems::Table)
                    .col(GalleryItems::Category)
                    .col(GalleryItems::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Admin enquiry inbox filters by status and sorts by date
        manager
            .create_index(
                Index::create()
                    .name("idx_enquiries_status_created_at")
                    .table(Enquiries::Table)
                    .col(Enquiries::Status)
                    .col(Enquiries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_category")
                    .table(Services::Table)
                    .col(Services::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_category").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_enquiries_status_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gallery_items_category_created_at")
                    .to_owned(),
            )
            .await
    }
}
