use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::auth::middleware::AdminSession;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::storage::upload::{object_name, read_image};
use crate::storage::{Bucket, ImageStorage};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
}

/// POST /api/gallery/upload: multipart field `image` (admin).
pub async fn upload_gallery_image(
    _admin: AdminSession,
    storage: web::Data<ImageStorage>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    store_image(Bucket::Gallery, storage.get_ref(), payload).await
}

/// POST /api/testimonials/upload: multipart field `image` (admin).
pub async fn upload_testimonial_image(
    _admin: AdminSession,
    storage: web::Data<ImageStorage>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    store_image(Bucket::Testimonials, storage.get_ref(), payload).await
}

async fn store_image(
    bucket: Bucket,
    storage: &ImageStorage,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = read_image(payload).await?;
    let file_name = object_name(bucket, upload.original_name.as_deref(), &upload.content_type);
    let size = upload.bytes.len();

    let image_url = storage
        .put(bucket, &file_name, &upload.content_type, upload.bytes)
        .await?;
    tracing::info!(bucket = bucket.as_str(), %file_name, size, "image uploaded");

    let mut body = ApiResponse::ok(UploadedImage { image_url });
    body.message = Some("Image uploaded successfully".to_string());
    Ok(HttpResponse::Ok().json(body))
}
