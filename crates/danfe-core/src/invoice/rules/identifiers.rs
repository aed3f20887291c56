//! Product code and lot extraction.

use super::patterns::{LOT, PRODUCT_CODE};

/// Catalog code found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCode {
    /// The 7 or 8 code digits.
    pub digits: String,
    /// Byte offset just past the code and its trailing whitespace character.
    pub end: usize,
}

/// Extract the catalog code anchoring a product line.
pub fn extract_code(line: &str) -> Option<ProductCode> {
    let caps = PRODUCT_CODE.captures(line)?;
    let full_match = caps.get(0)?;

    Some(ProductCode {
        digits: caps[1].to_string(),
        end: full_match.end(),
    })
}

/// Extract the lot following `Lt:`.
pub fn extract_lot(line: &str) -> Option<String> {
    LOT.captures(line).map(|caps| caps[1].to_string())
}
