use sea_orm::*;
use uuid::Uuid;

use crate::models::SortOrder;
use crate::models::gallery::{self, GalleryCategory, NewGalleryItem, UpdateGalleryItem};

/// Insert a new gallery item.
pub async fn insert_item(
    db: &DatabaseConnection,
    input: NewGalleryItem,
) -> Result<gallery::Model, DbErr> {
    let new_item = gallery::ActiveModel {
        id: Set(Uuid::new_v4()),
        image_url: Set(input.image_url),
        caption: Set(input.caption),
        category: Set(input.category),
        created_at: Set(chrono::Utc::now()),
    };

    new_item.insert(db).await
}

/// Fetch gallery items, optionally restricted to one category.
pub async fn get_items(
    db: &DatabaseConnection,
    category: Option<GalleryCategory>,
    sort: SortOrder,
) -> Result<Vec<gallery::Model>, DbErr> {
    let mut query = gallery::Entity::find();
    if let Some(category) = category {
        query = query.filter(gallery::Column::Category.eq(category));
    }
    query
        .order_by(gallery::Column::CreatedAt, sort.into())
        .all(db)
        .await
}

/// Fetch a single gallery item by ID.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gallery::Model>, DbErr> {
    gallery::Entity::find_by_id(id).one(db).await
}

/// Merge a patch into an existing gallery item.
pub async fn update_item(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateGalleryItem,
) -> Result<gallery::Model, DbErr> {
    let item = gallery::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Gallery item not found".to_string()))?;

    let mut active: gallery::ActiveModel = item.into();
    input.apply(&mut active);

    active.update(db).await
}

/// Delete a gallery item by ID.
pub async fn delete_item(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    gallery::Entity::delete_by_id(id).exec(db).await
}
