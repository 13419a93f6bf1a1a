pub mod enquiries;
pub mod gallery;
pub mod packages;
pub mod services;
pub mod settings;
pub mod testimonials;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, Order};

use crate::models::SortOrder;

/// Create a SeaORM connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    Database::connect(options).await
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Newest => Order::Desc,
            SortOrder::Oldest => Order::Asc,
        }
    }
}
