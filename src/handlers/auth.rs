use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::AdminSession;
use crate::auth::session::SessionStore;
use crate::auth::{AdminUser, credentials_match};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::response::ApiResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login: exchange the admin credentials for a session token.
pub async fn login(
    config: web::Data<AppConfig>,
    sessions: web::Data<SessionStore>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if !credentials_match(&config.admin, &body.email, &body.password) {
        tracing::warn!(email = %body.email, "failed admin login");
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let session = sessions.issue(AdminUser::from(&config.admin))?;
    tracing::info!(email = %session.user.email, "admin logged in");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(session)))
}

/// POST /api/auth/logout: revoke the presented token.
pub async fn logout(
    admin: AdminSession,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    sessions.revoke(&admin.0).await;
    tracing::info!(email = %admin.0.sub, "admin logged out");
    HttpResponse::Ok().json(ApiResponse::message("Logged out"))
}

/// GET /api/auth/me: who the presented token belongs to.
pub async fn me(admin: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(admin.0.user()))
}
