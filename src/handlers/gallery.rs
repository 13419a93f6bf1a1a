use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminSession;
use crate::db::gallery as gallery_db;
use crate::error::ApiError;
use crate::models::gallery::{CreateGalleryItem, GalleryCategory, UpdateGalleryItem};
use crate::models::{ListQuery, SortOrder};
use crate::response::ApiResponse;

/// GET /api/gallery: newest first; `?category=Hair` filters, `All` shows everything.
pub async fn get_items(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let category = query
        .category()
        .map(str::parse::<GalleryCategory>)
        .transpose()?;
    let items =
        gallery_db::get_items(db.get_ref(), category, query.sort_or(SortOrder::Newest)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

/// GET /api/gallery/{id}
pub async fn get_item(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let item = gallery_db::get_item_by_id(db.get_ref(), path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Gallery item not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(item)))
}

/// POST /api/gallery (admin).
pub async fn create_item(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateGalleryItem>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;
    let item = gallery_db::insert_item(db.get_ref(), input).await?;
    tracing::info!(id = %item.id, category = %item.category, "gallery item created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(item)))
}

/// PUT /api/gallery/{id} (admin).
pub async fn update_item(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGalleryItem>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner().validate()?;
    let item = gallery_db::update_item(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(item)))
}

/// DELETE /api/gallery/{id} (admin).
///
/// Only the row is removed; the uploaded image stays in storage.
pub async fn delete_item(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = gallery_db::delete_item(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Gallery item not found"));
    }
    tracing::info!(%id, "gallery item deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Gallery item deleted")))
}
