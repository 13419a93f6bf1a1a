use actix_multipart::Multipart;
use futures_util::StreamExt;
use uuid::Uuid;

use super::Bucket;
use crate::error::ApiError;

/// 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Multipart field carrying the file.
pub const IMAGE_FIELD: &str = "image";

/// An image read from a multipart body that passed type and size checks.
#[derive(Debug)]
pub struct ImageUpload {
    pub content_type: String,
    pub original_name: Option<String>,
    pub bytes: Vec<u8>,
}

pub fn check_content_type(content_type: Option<&str>) -> Result<String, ApiError> {
    match content_type {
        Some(ct) if ALLOWED_CONTENT_TYPES.contains(&ct) => Ok(ct.to_string()),
        _ => Err(ApiError::validation(
            "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.",
        )),
    }
}

fn too_large() -> ApiError {
    ApiError::validation("File too large. Maximum size is 5MB.")
}

/// Pull the `image` field out of a multipart body.
///
/// The content type is checked before any bytes are read and the size is
/// enforced while streaming, so an oversized body is never fully buffered.
pub async fn read_image(mut payload: Multipart) -> Result<ImageUpload, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::validation(format!("Invalid multipart body: {e}")))?;

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = check_content_type(field.content_type().map(|m| m.essence_str()))?;
        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| ApiError::validation(format!("Invalid multipart body: {e}")))?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(ApiError::validation("No file uploaded"));
        }

        return Ok(ImageUpload {
            content_type,
            original_name,
            bytes,
        });
    }

    Err(ApiError::validation("No file uploaded"))
}

/// Unique object name: `<prefix>-<unix millis>-<8 hex>.<ext>`.
///
/// The extension always agrees with the validated content type. The client's
/// own extension is kept only when it is one of that type's extensions.
pub fn object_name(bucket: Bucket, original_name: Option<&str>, content_type: &str) -> String {
    let allowed = extensions_for(content_type);
    let ext = original_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| allowed.contains(&ext.as_str()))
        .unwrap_or_else(|| allowed[0].to_string());

    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    format!(
        "{}-{}-{suffix}.{ext}",
        bucket.file_prefix(),
        chrono::Utc::now().timestamp_millis()
    )
}

/// Known extensions per allowed type; the first is the default.
fn extensions_for(content_type: &str) -> &'static [&'static str] {
    match content_type {
        "image/png" => &["png"],
        "image/gif" => &["gif"],
        "image/webp" => &["webp"],
        _ => &["jpg", "jpeg"],
    }
}
