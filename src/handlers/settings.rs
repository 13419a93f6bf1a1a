use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AdminSession;
use crate::db::settings as settings_db;
use crate::error::ApiError;
use crate::models::settings::{SettingsPatch, SiteSettings};
use crate::response::ApiResponse;

/// GET /api/settings
///
/// The storefront must always render, so a missing row or a store failure
/// falls back to the default settings.
pub async fn get_settings(db: web::Data<DatabaseConnection>) -> HttpResponse {
    let settings = match settings_db::get_settings(db.get_ref()).await {
        Ok(Some(settings)) => settings,
        Ok(None) => SiteSettings::default(),
        Err(e) => {
            tracing::warn!("Failed to fetch settings, serving defaults: {e}");
            SiteSettings::default()
        }
    };
    HttpResponse::Ok().json(ApiResponse::ok(settings))
}

/// PUT|POST /api/settings: merge and save (admin).
pub async fn update_settings(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SettingsPatch>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner().validate()?;
    let settings = settings_db::upsert_settings(db.get_ref(), patch).await?;
    tracing::info!("site settings updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(settings)))
}
