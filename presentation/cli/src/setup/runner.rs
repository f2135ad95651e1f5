use std::process::ExitCode;

use anyhow::Context;

use business::domain::matching::model::MatchOutcome;
use business::domain::product::use_cases::resolve::{ResolveProductParams, ResolveTopProductsParams};

use crate::cli::Cli;
use crate::report;
use crate::setup::dependency_injection::DependencyContainer;

/// Exit code when the catalog was loaded but nothing could be matched.
/// Kept apart from clap's usage error code (2) and from errors (1).
const EXIT_NO_MATCH: u8 = 3;

/// How a lookup ended once the catalog was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Identified,
    NotIdentified,
}

impl LookupStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            LookupStatus::Identified => 0,
            LookupStatus::NotIdentified => EXIT_NO_MATCH,
        }
    }
}

impl From<LookupStatus> for ExitCode {
    fn from(status: LookupStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}

pub struct Runner;

impl Runner {
    /// Loads the catalog once and answers a single lookup.
    ///
    /// Catalog load failures propagate as errors; an unidentified product
    /// is reported on stdout as [`LookupStatus::NotIdentified`].
    pub async fn run(cli: Cli, container: DependencyContainer) -> anyhow::Result<LookupStatus> {
        let catalog = container
            .load_catalog
            .execute()
            .await
            .context("could not load product catalog")?;

        if let Some(barcode) = cli.barcode.as_deref() {
            if let Some(product) = catalog.find_by_barcode(barcode) {
                print!("{}", report::format_barcode_match(barcode, product));
                return Ok(LookupStatus::Identified);
            }
            tracing::info!(barcode, "barcode not in catalog, falling back to OCR text");
        }

        let Some(ocr_text) = cli.ocr_text else {
            println!("Could not identify product: barcode not found in catalog");
            return Ok(LookupStatus::NotIdentified);
        };

        if let Some(limit) = cli.top {
            let ranked = container.resolve_product.execute_top_k(
                &catalog,
                ResolveTopProductsParams {
                    ocr_text: ocr_text.clone(),
                    limit: limit.get(),
                },
            );
            print!("{}", report::format_ranked(&ocr_text, &ranked));
            return Ok(if ranked.is_empty() {
                LookupStatus::NotIdentified
            } else {
                LookupStatus::Identified
            });
        }

        let outcome = container.resolve_product.execute(
            &catalog,
            ResolveProductParams {
                ocr_text: ocr_text.clone(),
            },
        );

        match outcome {
            MatchOutcome::Matched(result) => {
                print!("{}", report::format_match(&ocr_text, &result));
                Ok(LookupStatus::Identified)
            }
            MatchOutcome::NoMatch(reason) => {
                print!("{}", report::format_no_match(&ocr_text, &reason));
                Ok(LookupStatus::NotIdentified)
            }
        }
    }
}
