use async_trait::async_trait;

use super::errors::CatalogLoadError;

/// Port to the catalog store.
///
/// Implementations hand back the raw catalog document. Parsing happens in
/// [`Catalog::load`](super::model::Catalog::load).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable origin, used in logs.
    fn describe(&self) -> String;

    async fn read(&self) -> Result<Vec<u8>, CatalogLoadError>;
}
