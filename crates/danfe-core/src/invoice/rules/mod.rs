//! Rule-based field extractors for the DANFE layout.
//!
//! Each field has its own pattern and its own `line -> Option<field>` function, so one
//! noisy column never hides the others.

pub mod header;
pub mod identifiers;
pub mod amounts;
pub mod dates;
pub mod line_item;
pub mod patterns;

pub use header::{extract_header, HeaderExtractor};
pub use identifiers::{extract_code, extract_lot, ProductCode};
pub use amounts::{
    extract_quantity, extract_unit_price, format_brl_amount, parse_brl_amount, parse_quantity,
};
pub use dates::extract_expiry;
pub use line_item::{line_items, parse_line, LineItemExtractor};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
