//! Expiry date extraction.

use super::patterns::EXPIRY;

/// Extract the expiry following `Dt. Val.:`, verbatim as `DD/MM/YYYY`.
///
/// The text is not checked against the calendar here; see
/// [`ProductRecord::expiry_date`](crate::models::document::ProductRecord::expiry_date).
pub fn extract_expiry(line: &str) -> Option<String> {
    EXPIRY.captures(line).map(|caps| caps[1].to_string())
}
