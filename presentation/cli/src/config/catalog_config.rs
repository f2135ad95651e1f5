use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = "turkey_products.json";

/// Where the product catalog document lives.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_PATH: Path to the JSON catalog (default: "turkey_products.json")
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        Self { path: path.into() }
    }
}
