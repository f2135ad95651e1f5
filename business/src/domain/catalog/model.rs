use super::errors::CatalogLoadError;
use crate::domain::matching::normalize::normalize;
use crate::domain::product::model::Product;

/// A searchable entry: position in the raw load plus its precomputed key.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub index: usize,
    pub key: Vec<char>,
}

/// Immutable product catalog.
///
/// Keeps every loaded record, in load order, and a search index over the
/// eligible ones (non-blank name). There is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parses a JSON array of product objects.
    pub fn load(source: &[u8]) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_slice(source)
            .map_err(CatalogLoadError::malformed)?;
        Ok(Self::from_products(products))
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        let entries = products
            .iter()
            .enumerate()
            .filter(|(_, product)| product.is_eligible())
            .map(|(index, product)| CatalogEntry {
                index,
                key: normalize(&product.name).chars().collect(),
            })
            .collect();

        Self { products, entries }
    }

    /// Number of eligible products.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records that were loaded but cannot be matched.
    pub fn ineligible_count(&self) -> usize {
        self.products.len() - self.entries.len()
    }

    /// Every loaded record, eligible or not, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Eligible products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.entries.iter().map(|entry| &self.products[entry.index])
    }

    /// Exact lookup on an already decoded barcode string.
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return None;
        }
        self.products
            .iter()
            .find(|product| product.barcode.trim() == barcode)
    }
}
