use std::sync::Arc;

use crate::domain::catalog::model::Catalog;
use crate::domain::logger::Logger;
use crate::domain::matching::model::{MatchOutcome, MatchResult, NoMatch};
use crate::domain::matching::resolver::Resolver;
use crate::domain::product::use_cases::resolve::{
    ResolveProductParams, ResolveProductUseCase, ResolveTopProductsParams,
};

pub struct ResolveProductUseCaseImpl {
    pub resolver: Resolver,
    pub logger: Arc<dyn Logger>,
}

impl ResolveProductUseCaseImpl {
    fn warn_if_blank(&self, ocr_text: &str) {
        if ocr_text.trim().is_empty() {
            self.logger
                .warn("OCR text is empty, the match will be the shortest product name");
        }
    }
}

impl ResolveProductUseCase for ResolveProductUseCaseImpl {
    fn execute<'a>(
        &self,
        catalog: &'a Catalog,
        params: ResolveProductParams,
    ) -> MatchOutcome<'a> {
        self.logger.info(&format!(
            "Resolving OCR text against {} products: {:?}",
            catalog.size(),
            params.ocr_text
        ));
        self.warn_if_blank(&params.ocr_text);

        let outcome = self.resolver.resolve(catalog, &params.ocr_text);

        match &outcome {
            MatchOutcome::Matched(result) => self.logger.info(&format!(
                "Product resolved: {} (distance: {}, confidence: {:.2})",
                result.product.name, result.distance, result.confidence
            )),
            MatchOutcome::NoMatch(reason) => {
                let detail = match reason {
                    NoMatch::NoCandidates => "catalog has no matchable products".to_string(),
                    NoMatch::BelowThreshold(best) => format!(
                        "closest was {} with confidence {:.2} (minimum {:.2})",
                        best.product.name,
                        best.confidence,
                        self.resolver.policy().min_confidence
                    ),
                };
                self.logger
                    .warn(&format!("No product resolved [{}]: {}", reason, detail));
            }
        }

        outcome
    }

    fn execute_top_k<'a>(
        &self,
        catalog: &'a Catalog,
        params: ResolveTopProductsParams,
    ) -> Vec<MatchResult<'a>> {
        self.logger.info(&format!(
            "Ranking {} closest products for OCR text: {:?}",
            params.limit, params.ocr_text
        ));
        self.warn_if_blank(&params.ocr_text);

        let ranked = self
            .resolver
            .resolve_top_k(catalog, &params.ocr_text, params.limit);

        self.logger
            .debug(&format!("Ranked {} candidates", ranked.len()));

        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matching::model::MatchPolicy;
    use crate::domain::product::model::Product;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn lipton_catalog() -> Catalog {
        Catalog::from_products(vec![
            Product {
                name: "Lipton Ice Tea Peach 330ml".to_string(),
                brand: "Lipton".to_string(),
                price: "24,50 TL".to_string(),
                ..Product::default()
            },
            Product {
                name: "Lipton Ice Tea Lemon 330ml".to_string(),
                brand: "Lipton".to_string(),
                price: "24,50 TL".to_string(),
                ..Product::default()
            },
            Product::named("Pınar Süt 1L"),
        ])
    }

    #[test]
    fn should_resolve_product_when_ocr_text_is_close() {
        let catalog = lipton_catalog();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::default(),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: "LIPTON ice tea lemon 330ml".to_string(),
            },
        );

        let result = outcome.matched().unwrap();
        assert_eq!(result.product.name, "Lipton Ice Tea Lemon 330ml");
        assert_eq!(result.product.price, "24,50 TL");
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn should_return_no_match_when_catalog_is_empty() {
        let catalog = Catalog::default();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::default(),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: "Lipton".to_string(),
            },
        );

        assert_eq!(outcome, MatchOutcome::NoMatch(NoMatch::NoCandidates));
    }

    #[test]
    fn should_return_no_match_when_confidence_is_below_minimum() {
        let catalog = lipton_catalog();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::new(MatchPolicy::default().with_min_confidence(0.9)),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: "%%%% ### ~~".to_string(),
            },
        );

        assert!(matches!(outcome, MatchOutcome::NoMatch(NoMatch::BelowThreshold(_))));
    }

    #[test]
    fn should_log_no_match_reason_code() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.starts_with("No product resolved [below_threshold]"))
            .times(1)
            .returning(|_| ());

        let catalog = lipton_catalog();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::new(MatchPolicy::default().with_min_confidence(0.9)),
            logger: Arc::new(logger),
        };

        let outcome = use_case.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: "%%%% ### ~~".to_string(),
            },
        );

        assert!(!outcome.is_match());
    }

    #[test]
    fn should_warn_when_ocr_text_is_blank() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("OCR text is empty"))
            .times(1)
            .returning(|_| ());

        let catalog = lipton_catalog();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::default(),
            logger: Arc::new(logger),
        };

        let outcome = use_case.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: "   ".to_string(),
            },
        );

        assert_eq!(outcome.matched().unwrap().product.name, "Pınar Süt 1L");
    }

    #[test]
    fn should_rank_top_products_when_limit_is_given() {
        let catalog = lipton_catalog();
        let use_case = ResolveProductUseCaseImpl {
            resolver: Resolver::default(),
            logger: mock_logger(),
        };

        let ranked = use_case.execute_top_k(
            &catalog,
            ResolveTopProductsParams {
                ocr_text: "Lipton Ice Tea Peach 330ml".to_string(),
                limit: 2,
            },
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].product.name, "Lipton Ice Tea Peach 330ml");
        assert_eq!(ranked[1].product.name, "Lipton Ice Tea Lemon 330ml");
        assert!(ranked[0].distance <= ranked[1].distance);
    }
}
