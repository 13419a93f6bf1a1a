use std::path::{Path, PathBuf};

use super::{Bucket, StorageError};

/// URL prefix the upload directory is served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Writes images to a directory on the server's disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn put(
        &self,
        bucket: Bucket,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let dir = self.root.join(bucket.as_str());
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(file_name), bytes).await?;

        tracing::debug!(bucket = bucket.as_str(), file_name, "stored image on disk");
        Ok(format!("{PUBLIC_PREFIX}/{}/{file_name}", bucket.as_str()))
    }
}
