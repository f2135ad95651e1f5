/// Catalog load errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("catalog.unreadable")]
    Unreadable(#[source] std::io::Error),
    #[error("catalog.malformed")]
    Malformed(#[source] serde_json::Error),
}

impl CatalogLoadError {
    pub fn unreadable(source: std::io::Error) -> Self {
        CatalogLoadError::Unreadable(source)
    }
    pub fn malformed(source: serde_json::Error) -> Self {
        CatalogLoadError::Malformed(source)
    }
}
