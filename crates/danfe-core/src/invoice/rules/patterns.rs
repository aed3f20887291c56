//! Regex patterns for the DANFE product layout.
//!
//! Expected product line:
//! `CODE NAME Lt: LOT Q: QTY Dt. Val.: DD/MM/YYYY R$ PRICE`

use lazy_static::lazy_static;
use regex::Regex;

/// Literal lot marker; the product name ends where it starts.
pub const LOT_MARKER: &str = "Lt:";

lazy_static! {
    // Invoice number: "NF-e 026229", "NF-e No. 026229", "nf-e Nº026229"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)NF-e\s*(?:N[ºo°]\.?\s*)?([0-9]+)"
    ).unwrap();

    // Catalog code anchoring the line, followed by one whitespace character
    pub static ref PRODUCT_CODE: Regex = Regex::new(
        r"^([0-9]{7,8})\s"
    ).unwrap();

    pub static ref LOT: Regex = Regex::new(
        r"Lt:\s*([A-Z0-9\-]+)"
    ).unwrap();

    // Decimal comma only, no thousands separator
    pub static ref QUANTITY: Regex = Regex::new(
        r"Q:\s*([0-9,]+)"
    ).unwrap();

    pub static ref EXPIRY: Regex = Regex::new(
        r"Dt\. Val\.:\s*([0-9]{2}/[0-9]{2}/[0-9]{4})"
    ).unwrap();

    // Thousands dots and a decimal comma: "1.234,56"
    pub static ref UNIT_PRICE: Regex = Regex::new(
        r"R\$\s*([0-9,.]+)"
    ).unwrap();
}
