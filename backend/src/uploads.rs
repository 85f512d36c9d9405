use std::path::{Path, PathBuf};
use rocket::fs::TempFile;
use tracing::{debug, warn};
use uuid::Uuid;
use crate::error::ApiError;

/// Directory holding accepted images, named `<uuid>.<ext>`.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub async fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub async fn save(&self, file: &mut TempFile<'_>, extension: &str) -> Result<String, ApiError> {
        let name = format!("{}.{}", Uuid::new_v4(), extension);
        file.move_copy_to(self.path_for(&name))
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;

        debug!("Stored upload as {}", name);
        Ok(name)
    }

    pub async fn remove(&self, name: &str) {
        if let Err(e) = tokio::fs::remove_file(self.path_for(name)).await {
            warn!("Failed to remove orphaned upload {}: {}", name, e);
        }
    }
}
