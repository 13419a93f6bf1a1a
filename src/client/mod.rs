//! Typed async client for the `/api` surface plus the client-side caches the
//! storefront and back office keep on top of it.

pub mod collection;
pub mod export;
pub mod fallback;
pub mod session;
pub mod settings;

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::AdminUser;
use crate::auth::session::IssuedSession;
use crate::handlers::auth::LoginRequest;
use crate::handlers::uploads::UploadedImage;
use crate::models::settings::{SettingsPatch, SiteSettings};
use crate::models::{enquiries, gallery, packages, services, testimonials};
use crate::response::ApiResponse;
use crate::storage::Bucket;

pub use crate::models::ListQuery as ListParams;
pub use collection::Collection;
pub use session::AdminSession;
pub use settings::SettingsCache;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Response carried no data")]
    MissingData,
}

impl ClientError {
    /// HTTP status when the server answered with an error envelope.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A REST collection the client can list, create, update and delete.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path below the API base, e.g. `services`.
    const PATH: &'static str;
    /// Also fall back to seed data when the server returns an empty list.
    const SEED_WHEN_EMPTY: bool = false;
    /// Listed newest first: new items go to the front of a cached list and
    /// seed data is ordered newest first unless the params say otherwise.
    const INSERT_AT_FRONT: bool = false;

    type Create: Serialize + Sync;
    type Patch: Serialize + Sync;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// Whether the item passes the list filters in `params`, the same way the
    /// server's list endpoint would decide.
    fn matches(&self, _params: &ListParams) -> bool {
        true
    }

    /// Hardcoded list shown when the backend cannot be reached.
    fn fallback() -> Vec<Self>;
}

impl Resource for services::Model {
    const PATH: &'static str = "services";
    type Create = services::CreateService;
    type Patch = services::UpdateService;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn matches(&self, params: &ListParams) -> bool {
        params.category().is_none_or(|category| self.category == category)
    }

    fn fallback() -> Vec<Self> {
        fallback::services()
    }
}

impl Resource for packages::Model {
    const PATH: &'static str = "packages";
    type Create = packages::CreatePackage;
    type Patch = packages::UpdatePackage;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn fallback() -> Vec<Self> {
        fallback::packages()
    }
}

impl Resource for gallery::Model {
    const PATH: &'static str = "gallery";
    const SEED_WHEN_EMPTY: bool = true;
    const INSERT_AT_FRONT: bool = true;
    type Create = gallery::CreateGalleryItem;
    type Patch = gallery::UpdateGalleryItem;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn matches(&self, params: &ListParams) -> bool {
        params.category().is_none_or(|category| {
            category
                .parse::<gallery::GalleryCategory>()
                .is_ok_and(|c| c == self.category)
        })
    }

    fn fallback() -> Vec<Self> {
        fallback::gallery()
    }
}

impl Resource for testimonials::Model {
    const PATH: &'static str = "testimonials";
    const INSERT_AT_FRONT: bool = true;
    type Create = testimonials::CreateTestimonial;
    type Patch = testimonials::UpdateTestimonial;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn fallback() -> Vec<Self> {
        fallback::testimonials()
    }
}

impl Resource for enquiries::Model {
    const PATH: &'static str = "enquiries";
    const INSERT_AT_FRONT: bool = true;
    type Create = enquiries::CreateEnquiry;
    type Patch = enquiries::UpdateEnquiry;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn matches(&self, params: &ListParams) -> bool {
        params.status().is_none_or(|status| {
            status
                .parse::<enquiries::EnquiryStatus>()
                .is_ok_and(|s| s == self.status)
        })
    }

    fn fallback() -> Vec<Self> {
        fallback::enquiries()
    }
}

/// HTTP client for the parlor API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// `base_url` points at the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ── Generic CRUD ──

    pub async fn list<R: Resource>(&self, params: &ListParams) -> Result<Vec<R>, ClientError> {
        let request = self.client.get(self.url(R::PATH)).query(params);
        self.send(request).await
    }

    pub async fn get<R: Resource>(&self, id: Uuid) -> Result<R, ClientError> {
        let request = self.client.get(self.url(&format!("{}/{id}", R::PATH)));
        self.send(request).await
    }

    pub async fn create<R: Resource>(&self, input: &R::Create) -> Result<R, ClientError> {
        let request = self.client.post(self.url(R::PATH)).json(input);
        self.send(request).await
    }

    pub async fn update<R: Resource>(&self, id: Uuid, patch: &R::Patch) -> Result<R, ClientError> {
        let request = self
            .client
            .put(self.url(&format!("{}/{id}", R::PATH)))
            .json(patch);
        self.send(request).await
    }

    pub async fn delete<R: Resource>(&self, id: Uuid) -> Result<(), ClientError> {
        let request = self.client.delete(self.url(&format!("{}/{id}", R::PATH)));
        self.send_empty(request).await
    }

    /// Enquiry deletion re-checks the admin password server side.
    pub async fn delete_enquiry(&self, id: Uuid, password: &str) -> Result<(), ClientError> {
        let request = self
            .client
            .delete(self.url(&format!("enquiries/{id}")))
            .json(&enquiries::DeleteEnquiry {
                password: password.to_string(),
            });
        self.send_empty(request).await
    }

    /// Upload an image and return its public URL.
    pub async fn upload_image(
        &self,
        bucket: Bucket,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part(crate::storage::upload::IMAGE_FIELD, part);

        let request = self
            .client
            .post(self.url(&format!("{}/upload", bucket.as_str())))
            .multipart(form);
        let uploaded: UploadedImage = self.send(request).await?;
        Ok(uploaded.image_url)
    }

    // ── Settings ──

    pub async fn settings(&self) -> Result<SiteSettings, ClientError> {
        self.send(self.client.get(self.url("settings"))).await
    }

    pub async fn update_settings(&self, patch: &SettingsPatch) -> Result<SiteSettings, ClientError> {
        self.send(self.client.put(self.url("settings")).json(patch))
            .await
    }

    // ── Auth ──

    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.client.post(self.url("auth/login")).json(&body))
            .await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.send_empty(self.client.post(self.url("auth/logout")))
            .await
    }

    pub async fn me(&self) -> Result<AdminUser, ClientError> {
        self.send(self.client.get(self.url("auth/me"))).await
    }

    // ── Envelope handling ──

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let data = self
            .envelope(request)
            .await?
            .data
            .ok_or(ClientError::MissingData)?;
        Ok(serde_json::from_value(data)?)
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.envelope(request).await.map(|_| ())
    }

    async fn envelope(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<serde_json::Value>, ClientError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = match serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message: text,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() || !body.success {
            let message = body
                .error
                .or(body.message)
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}
