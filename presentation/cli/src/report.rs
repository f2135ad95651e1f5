use business::domain::matching::model::{MatchResult, NoMatch};
use business::domain::product::model::Product;

/// Console rendering of resolver results.
pub fn format_match(ocr_text: &str, result: &MatchResult<'_>) -> String {
    let mut out = format!("OCR text: {}\n", ocr_text);
    out.push_str(&format_product(result.product));
    out.push_str(&format!(
        "Distance: {}\nConfidence: {:.2}\n",
        result.distance, result.confidence
    ));
    out
}

pub fn format_barcode_match(barcode: &str, product: &Product) -> String {
    format!("Barcode: {}\n{}", barcode.trim(), format_product(product))
}

pub fn format_no_match(ocr_text: &str, reason: &NoMatch<'_>) -> String {
    match reason {
        NoMatch::NoCandidates => format!(
            "OCR text: {}\nCould not identify product: the catalog has no matchable products\n",
            ocr_text
        ),
        NoMatch::BelowThreshold(best) => format!(
            "OCR text: {}\nCould not identify product: closest was {} (confidence {:.2})\n",
            ocr_text, best.product.name, best.confidence
        ),
    }
}

pub fn format_ranked(ocr_text: &str, ranked: &[MatchResult<'_>]) -> String {
    if ranked.is_empty() {
        return format!(
            "OCR text: {}\nCould not identify product: the catalog has no matchable products\n",
            ocr_text
        );
    }

    let mut out = format!("OCR text: {}\nDid you mean:\n", ocr_text);
    for (rank, result) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} ({}) distance {} confidence {:.2}\n",
            rank + 1,
            result.product.name,
            display_or_dash(&result.product.brand),
            result.distance,
            result.confidence
        ));
    }
    out
}

fn format_product(product: &Product) -> String {
    format!(
        "Matched product: {}\nBrand: {}\nPrice: {}\n",
        product.name,
        display_or_dash(&product.brand),
        display_or_dash(&product.price)
    )
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
