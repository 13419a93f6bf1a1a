//! Object storage for uploaded images.
//!
//! Uploads are validated in [`upload`] before anything reaches a backend, so a
//! rejected file never produces a stored object.

pub mod local;
pub mod supabase;
pub mod upload;

use thiserror::Error;

use crate::config::StorageBackend;

pub use local::LocalStorage;
pub use supabase::SupabaseStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to upload image to storage: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage rejected upload: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One bucket per kind of uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Gallery,
    Testimonials,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
        }
    }

    /// Prefix for generated file names, e.g. `gallery-1734000000000-1a2b3c4d.jpg`.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonial",
        }
    }
}

#[derive(Clone)]
pub enum ImageStorage {
    Local(LocalStorage),
    Supabase(SupabaseStorage),
}

impl ImageStorage {
    pub fn from_config(backend: &StorageBackend) -> Self {
        match backend {
            StorageBackend::Local { upload_dir } => Self::Local(LocalStorage::new(upload_dir)),
            StorageBackend::Supabase { url, service_key } => {
                Self::Supabase(SupabaseStorage::new(url, service_key))
            }
        }
    }

    /// Store `bytes` under `bucket/file_name` and return the public URL.
    pub async fn put(
        &self,
        bucket: Bucket,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        match self {
            Self::Local(local) => local.put(bucket, file_name, bytes).await,
            Self::Supabase(supabase) => supabase.put(bucket, file_name, content_type, bytes).await,
        }
    }
}
