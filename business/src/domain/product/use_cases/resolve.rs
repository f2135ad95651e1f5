use crate::domain::catalog::model::Catalog;
use crate::domain::matching::model::{MatchOutcome, MatchResult};

pub struct ResolveProductParams {
    pub ocr_text: String,
}

pub struct ResolveTopProductsParams {
    pub ocr_text: String,
    pub limit: usize,
}

/// Resolves OCR text against a loaded catalog. Pure computation, no I/O.
pub trait ResolveProductUseCase: Send + Sync {
    fn execute<'a>(
        &self,
        catalog: &'a Catalog,
        params: ResolveProductParams,
    ) -> MatchOutcome<'a>;

    fn execute_top_k<'a>(
        &self,
        catalog: &'a Catalog,
        params: ResolveTopProductsParams,
    ) -> Vec<MatchResult<'a>>;
}
