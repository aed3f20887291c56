//! Core library for DANFE invoice text extraction.
//!
//! This crate provides:
//! - Invoice number (NF-e) recognition over a whole document
//! - Per-line product recognition (code, name, lot, quantity, expiry, unit price)
//! - Document assembly with the two terminal failures: no header, no products
//! - Brazilian amount parsing and formatting (`1.234,56`)
//!
//! Input is plain text that was already extracted from the source document.

pub mod error;
pub mod models;
pub mod invoice;

pub use error::{DanfeError, ExtractionError, Result};
pub use models::config::DanfeConfig;
pub use models::document::{InvoiceDocument, ProductRecord};
pub use invoice::{extract_header, parse_document, parse_line};
pub use invoice::{DanfeParser, ExtractionResult, InvoiceParser};
