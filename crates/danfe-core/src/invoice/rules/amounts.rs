//! Quantity and unit price extraction (Brazilian decimal comma).

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{QUANTITY, UNIT_PRICE};

/// Extract the quantity following `Q:`.
pub fn extract_quantity(line: &str) -> Option<Decimal> {
    let caps = QUANTITY.captures(line)?;
    parse_quantity(&caps[1])
}

/// Extract the unit price following `R$`.
pub fn extract_unit_price(line: &str) -> Option<Decimal> {
    let caps = UNIT_PRICE.captures(line)?;
    parse_brl_amount(&caps[1])
}

/// Parse a quantity where the comma is the decimal separator (e.g., "1,5").
pub fn parse_quantity(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.trim().replace(',', ".")).ok()
}

/// Parse a BRL amount (e.g., "1.234,56").
///
/// Thousands dots are dropped before the comma becomes the decimal point.
pub fn parse_brl_amount(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format amount in BRL style (1.234,56).
pub fn format_brl_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.round_dp(2).abs());
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}
