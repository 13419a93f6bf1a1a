use sea_orm::*;
use uuid::Uuid;

use crate::models::SortOrder;
use crate::models::packages::{self, NewPackage, PackagePatch};

/// Insert a new package.
pub async fn insert_package(
    db: &DatabaseConnection,
    input: NewPackage,
) -> Result<packages::Model, DbErr> {
    let new_package = packages::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        discount: Set(input.discount),
        valid_until: Set(input.valid_until),
        image_url: Set(input.image_url),
        created_at: Set(chrono::Utc::now()),
    };

    new_package.insert(db).await
}

/// Fetch all packages.
pub async fn get_packages(
    db: &DatabaseConnection,
    sort: SortOrder,
) -> Result<Vec<packages::Model>, DbErr> {
    packages::Entity::find()
        .order_by(packages::Column::CreatedAt, sort.into())
        .all(db)
        .await
}

/// Fetch a single package by ID.
pub async fn get_package_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<packages::Model>, DbErr> {
    packages::Entity::find_by_id(id).one(db).await
}

/// Merge a validated patch into an existing package.
pub async fn update_package(
    db: &DatabaseConnection,
    id: Uuid,
    patch: PackagePatch,
) -> Result<packages::Model, DbErr> {
    let package = packages::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Package not found".to_string()))?;

    let mut active: packages::ActiveModel = package.into();
    patch.apply(&mut active);

    active.update(db).await
}

/// Delete a package by ID.
pub async fn delete_package(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    packages::Entity::delete_by_id(id).exec(db).await
}
