use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminSession;
use crate::db::packages as package_db;
use crate::error::ApiError;
use crate::models::packages::{CreatePackage, UpdatePackage};
use crate::models::{ListQuery, SortOrder};
use crate::response::ApiResponse;

/// GET /api/packages
pub async fn get_packages(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let packages = package_db::get_packages(db.get_ref(), query.sort_or(SortOrder::Oldest)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(packages)))
}

/// GET /api/packages/{id}
pub async fn get_package(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let package = package_db::get_package_by_id(db.get_ref(), path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Package not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(package)))
}

/// POST /api/packages (admin).
pub async fn create_package(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePackage>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;
    let package = package_db::insert_package(db.get_ref(), input).await?;
    tracing::info!(id = %package.id, "package created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(package)))
}

/// PUT /api/packages/{id} (admin).
pub async fn update_package(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePackage>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner().validate()?;
    let package = package_db::update_package(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(package)))
}

/// DELETE /api/packages/{id} (admin).
pub async fn delete_package(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = package_db::delete_package(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Package not found"));
    }
    tracing::info!(%id, "package deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Package deleted")))
}
