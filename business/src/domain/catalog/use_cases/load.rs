use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogLoadError;
use crate::domain::catalog::model::Catalog;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Catalog, CatalogLoadError>;
}
