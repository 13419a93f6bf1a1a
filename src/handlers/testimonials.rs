use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminSession;
use crate::db::testimonials as testimonial_db;
use crate::error::ApiError;
use crate::models::testimonials::{CreateTestimonial, UpdateTestimonial};
use crate::models::{ListQuery, SortOrder};
use crate::response::ApiResponse;

/// GET /api/testimonials: newest first.
pub async fn get_testimonials(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let testimonials =
        testimonial_db::get_testimonials(db.get_ref(), query.sort_or(SortOrder::Newest)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(testimonials)))
}

/// GET /api/testimonials/{id}
pub async fn get_testimonial(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let testimonial = testimonial_db::get_testimonial_by_id(db.get_ref(), path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(testimonial)))
}

/// POST /api/testimonials (admin).
pub async fn create_testimonial(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateTestimonial>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;
    let testimonial = testimonial_db::insert_testimonial(db.get_ref(), input).await?;
    tracing::info!(id = %testimonial.id, "testimonial created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(testimonial)))
}

/// PUT /api/testimonials/{id} (admin).
pub async fn update_testimonial(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTestimonial>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner().validate()?;
    let testimonial =
        testimonial_db::update_testimonial(db.get_ref(), path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(testimonial)))
}

/// DELETE /api/testimonials/{id} (admin).
pub async fn delete_testimonial(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = testimonial_db::delete_testimonial(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Testimonial not found"));
    }
    tracing::info!(%id, "testimonial deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Testimonial deleted successfully")))
}
