use std::sync::Arc;

use catalog::file::JsonFileCatalogSource;
use logger::TracingLogger;

use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::product::resolve::ResolveProductUseCaseImpl;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;
use business::domain::matching::resolver::Resolver;
use business::domain::product::use_cases::resolve::ResolveProductUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub load_catalog: Arc<dyn LoadCatalogUseCase>,
    pub resolve_product: Arc<dyn ResolveProductUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        // Infrastructure adapters
        let catalog_source = Arc::new(JsonFileCatalogSource::new(config.catalog.path.clone()));

        let load_catalog = Arc::new(LoadCatalogUseCaseImpl {
            source: catalog_source,
            logger: Arc::new(TracingLogger::new("catalog")),
        });
        let resolve_product = Arc::new(ResolveProductUseCaseImpl {
            resolver: Resolver::new(config.resolver.policy()),
            logger: Arc::new(TracingLogger::new("resolver")),
        });

        Self {
            load_catalog,
            resolve_product,
        }
    }
}
