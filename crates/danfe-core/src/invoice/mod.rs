//! DANFE field extraction module.

mod parser;
pub mod rules;

pub use parser::{parse_document, DanfeParser, ExtractionResult, InvoiceParser};
pub use rules::{extract_header, parse_line};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
