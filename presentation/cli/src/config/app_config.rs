use super::{ConfigError, catalog_config::CatalogConfig, resolver_config::ResolverConfig};

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub resolver: ResolverConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            catalog: CatalogConfig::from_env(),
            resolver: ResolverConfig::from_env()?,
        })
    }
}
