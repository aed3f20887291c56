//! Error types for the danfe-core library.

use thiserror::Error;

/// Main error type for the danfe library.
#[derive(Error, Debug)]
pub enum DanfeError {
    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Terminal failures of a document parse.
///
/// Lines that are not product lines never surface here; they are skipped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionError {
    /// The `NF-e` number marker was not found anywhere in the text.
    #[error("invoice number (NF-e) not found")]
    HeaderNotFound,

    /// The header was found but no line passed product recognition.
    #[error("no products found")]
    NoItemsFound,
}

/// Result type for the danfe library.
pub type Result<T> = std::result::Result<T, DanfeError>;
