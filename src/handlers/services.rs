use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminSession;
use crate::db::services as service_db;
use crate::error::ApiError;
use crate::models::services::{CreateService, UpdateService};
use crate::models::{ListQuery, SortOrder};
use crate::response::ApiResponse;

/// GET /api/services: list services, optionally `?category=Hair` and `?sort=newest`.
pub async fn get_services(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let services = service_db::get_services(
        db.get_ref(),
        query.category(),
        query.sort_or(SortOrder::Oldest),
    )
    .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(services)))
}

/// GET /api/services/{id}
pub async fn get_service(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let service = service_db::get_service_by_id(db.get_ref(), path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Service not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(service)))
}

/// POST /api/services: create a service (admin).
pub async fn create_service(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateService>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;
    let service = service_db::insert_service(db.get_ref(), input).await?;
    tracing::info!(id = %service.id, "service created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(service)))
}

/// PUT /api/services/{id}: partial update (admin).
pub async fn update_service(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateService>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner().validate()?;
    let service = service_db::update_service(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(service)))
}

/// DELETE /api/services/{id} (admin).
pub async fn delete_service(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = service_db::delete_service(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Service not found"));
    }
    tracing::info!(%id, "service deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Service deleted")))
}
