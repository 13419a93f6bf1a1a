use super::{Bucket, StorageError};

/// Supabase Storage over its REST API.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStorage {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, bucket: Bucket, file_name: &str) -> String {
        format!("{}/storage/v1/object/{}/{file_name}", self.base_url, bucket.as_str())
    }

    pub fn public_url(&self, bucket: Bucket, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{file_name}",
            self.base_url,
            bucket.as_str()
        )
    }

    pub async fn put(
        &self,
        bucket: Bucket,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let response = self
            .client
            .post(self.object_url(bucket, file_name))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, bucket = bucket.as_str(), "storage upload rejected");
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(self.public_url(bucket, file_name))
    }
}
