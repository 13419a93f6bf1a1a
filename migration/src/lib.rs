pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_services_table;
mod m20250301_000002_create_packages_table;
mod m20250301_000003_create_gallery_items_table;
mod m20250301_000004_create_testimonials_table;
mod m20250301_000005_create_enquiries_table;
mod m20250301_000006_create_site_settings_table;
mod m20250308_000001_add_list_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_services_table::Migration),
            Box::new(m20250301_000002_create_packages_table::Migration),
            Box::new(m20250301_000003_create_gallery_items_table::Migration),
            Box::new(m20250301_000004_create_testimonials_table::Migration),
            Box::new(m20250301_000005_create_enquiries_table::Migration),
            Box::new(m20250301_000006_create_site_settings_table::Migration),
            Box::new(m20250308_000001_add_list_indexes::Migration),
        ]
    }
}
