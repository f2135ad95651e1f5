use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "foodlens")]
#[command(about = "Match OCR text from a product label against a product catalog")]
#[command(long_about = None)]
pub struct Cli {
    /// Text recognized on the product label
    #[arg(required_unless_present = "barcode")]
    pub ocr_text: Option<String>,

    /// Catalog JSON file (overrides CATALOG_PATH)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Print the K closest products instead of the single best one (K >= 1)
    #[arg(short, long, value_name = "K")]
    pub top: Option<NonZeroUsize>,

    /// Minimum confidence for a match, between 0 and 1 (overrides MATCH_MIN_CONFIDENCE)
    #[arg(long, value_parser = parse_min_confidence)]
    pub min_confidence: Option<f64>,

    /// Look the product up by an already decoded barcode first
    #[arg(short, long)]
    pub barcode: Option<String>,
}

fn parse_min_confidence(value: &str) -> Result<f64, String> {
    crate::config::resolver_config::parse_confidence("--min-confidence", value.to_string())
        .map_err(|e| e.to_string())
}
