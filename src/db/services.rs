use sea_orm::*;
use uuid::Uuid;

use crate::models::SortOrder;
use crate::models::services::{self, NewService, UpdateService};

/// Insert a new service.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<services::Model, DbErr> {
    let new_service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        price: Set(input.price),
        category: Set(input.category),
        icon: Set(Some(input.icon)),
        image_url: Set(input.image_url),
        created_at: Set(chrono::Utc::now()),
    };

    new_service.insert(db).await
}

/// Fetch services, optionally restricted to one category.
pub async fn get_services(
    db: &DatabaseConnection,
    category: Option<&str>,
    sort: SortOrder,
) -> Result<Vec<services::Model>, DbErr> {
    let mut query = services::Entity::find();
    if let Some(category) = category {
        query = query.filter(services::Column::Category.eq(category));
    }
    query
        .order_by(services::Column::CreatedAt, sort.into())
        .all(db)
        .await
}

/// Fetch a single service by ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find_by_id(id).one(db).await
}

/// Merge a patch into an existing service.
pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateService,
) -> Result<services::Model, DbErr> {
    let service = services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Service not found".to_string()))?;

    let mut active: services::ActiveModel = service.into();
    input.apply(&mut active);

    active.update(db).await
}

/// Delete a service by ID.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id).exec(db).await
}
