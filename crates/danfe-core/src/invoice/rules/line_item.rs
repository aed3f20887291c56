//! Product line recognition.

use tracing::trace;

use crate::models::document::ProductRecord;

use super::amounts::{extract_quantity, extract_unit_price};
use super::dates::extract_expiry;
use super::identifiers::{extract_code, extract_lot};
use super::patterns::LOT_MARKER;
use super::FieldExtractor;

/// Recognize one physical line as a product.
///
/// All five sub-matches (code, lot, quantity, expiry, unit price) must succeed;
/// otherwise the line is not a product line and `None` is returned.
pub fn parse_line(line: &str) -> Option<ProductRecord> {
    let Some(code) = extract_code(line) else {
        trace!("skipping line without product code");
        return None;
    };

    let Some(lot) = extract_lot(line) else {
        trace!("skipping {}: no lot", code.digits);
        return None;
    };

    let Some(quantity) = extract_quantity(line) else {
        trace!("skipping {}: no quantity", code.digits);
        return None;
    };

    let Some(expiry) = extract_expiry(line) else {
        trace!("skipping {}: no expiry date", code.digits);
        return None;
    };

    let Some(unit_price) = extract_unit_price(line) else {
        trace!("skipping {}: no unit price", code.digits);
        return None;
    };

    let name = product_name(line, code.end);

    Some(ProductRecord {
        code: code.digits,
        name,
        lot,
        quantity,
        expiry,
        unit_price,
    })
}

/// Text between the code and the first lot marker; empty when that range is inverted.
fn product_name(line: &str, start: usize) -> String {
    line.find(LOT_MARKER)
        .and_then(|end| line.get(start..end))
        .map(|name| name.trim().to_string())
        .unwrap_or_default()
}

/// Lazily recognize products, one physical line at a time, in source order.
pub fn line_items(text: &str) -> impl Iterator<Item = ProductRecord> + '_ {
    text.lines().filter_map(parse_line)
}

/// Product line extractor over whole documents.
pub struct LineItemExtractor;

impl LineItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LineItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LineItemExtractor {
    type Output = ProductRecord;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        line_items(text).next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        line_items(text).collect()
    }
}
