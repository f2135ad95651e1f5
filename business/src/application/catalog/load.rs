use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogLoadError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::source::CatalogSource;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Catalog, CatalogLoadError> {
        let origin = self.source.describe();
        self.logger
            .info(&format!("Loading product catalog from {}", origin));

        let bytes = self.source.read().await.inspect_err(|e| {
            self.logger
                .error(&format!("Could not read catalog from {}: {:?}", origin, e));
        })?;

        let catalog = Catalog::load(&bytes).inspect_err(|e| {
            self.logger
                .error(&format!("Catalog from {} is malformed: {:?}", origin, e));
        })?;

        if catalog.ineligible_count() > 0 {
            self.logger.warn(&format!(
                "{} products without a name are excluded from matching",
                catalog.ineligible_count()
            ));
        }
        if catalog.is_empty() {
            self.logger
                .warn("Catalog has no matchable products, every lookup will report no match");
        }
        self.logger.info(&format!(
            "Loaded {} products ({} matchable)",
            catalog.products().len(),
            catalog.size()
        ));

        Ok(catalog)
    }
}
