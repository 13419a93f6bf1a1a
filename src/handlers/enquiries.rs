use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminSession;
use crate::auth::password_matches;
use crate::config::AppConfig;
use crate::db::enquiries as enquiry_db;
use crate::error::ApiError;
use crate::models::enquiries::{CreateEnquiry, DeleteEnquiry, EnquiryStatus, UpdateEnquiry};
use crate::models::{ListQuery, SortOrder};
use crate::response::ApiResponse;

/// GET /api/enquiries: admin inbox. `?status=New|Contacted|Closed|All`,
/// `?sort=oldest` (default newest first).
pub async fn get_enquiries(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let status = query
        .status()
        .map(str::parse::<EnquiryStatus>)
        .transpose()?;
    let enquiries =
        enquiry_db::get_enquiries(db.get_ref(), status, query.sort_or(SortOrder::Newest)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(enquiries)))
}

/// GET /api/enquiries/{id} (admin).
pub async fn get_enquiry(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let enquiry = enquiry_db::get_enquiry_by_id(db.get_ref(), path.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("Enquiry not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(enquiry)))
}

/// POST /api/enquiries: public contact form.
pub async fn create_enquiry(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateEnquiry>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().validate()?;
    let enquiry = enquiry_db::insert_enquiry(db.get_ref(), input).await?;
    tracing::info!(id = %enquiry.id, service = %enquiry.service, "enquiry received");
    Ok(HttpResponse::Created().json(ApiResponse::ok(enquiry)))
}

/// PUT /api/enquiries/{id}: change status and/or notes (admin).
pub async fn update_enquiry(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateEnquiry>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let enquiry = enquiry_db::update_enquiry(db.get_ref(), id, body.into_inner()).await?;
    tracing::info!(%id, status = %enquiry.status, "enquiry updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(enquiry)))
}

/// DELETE /api/enquiries/{id} (admin).
///
/// Deleting customer data asks the admin to re-enter their password in the body:
/// `{ "password": "..." }`. A wrong password leaves the row untouched.
pub async fn delete_enquiry(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    config: web::Data<AppConfig>,
    path: web::Path<Uuid>,
    body: web::Json<DeleteEnquiry>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !password_matches(&config.admin, &body.password) {
        tracing::warn!(%id, "enquiry delete rejected: wrong password");
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let result = enquiry_db::delete_enquiry(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Enquiry not found"));
    }
    tracing::info!(%id, "enquiry deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Enquiry deleted successfully")))
}
