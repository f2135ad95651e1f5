use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::catalog::errors::CatalogLoadError;
use business::domain::catalog::source::CatalogSource;

/// Reads a catalog document (JSON array of products) from disk.
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, CatalogLoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "catalog file read failed");
            CatalogLoadError::unreadable(e)
        })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "catalog file read");
        Ok(bytes)
    }
}
