//! Document assembly: header gate, line recognition, items gate.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::document::{InvoiceDocument, ValidationIssue};

use super::rules::{line_items, FieldExtractor, HeaderExtractor};
use super::Result;

/// Result of document extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted document.
    pub document: InvoiceDocument,
    /// Non-fatal findings about the document.
    pub warnings: Vec<String>,
    /// Number of physical lines inspected.
    pub lines_scanned: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse a document from text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Parse a DANFE text into its invoice number and products.
///
/// Fails with [`ExtractionError::HeaderNotFound`] when no `NF-e` number is present, and
/// with [`ExtractionError::NoItemsFound`] when no line is a complete product line.
pub fn parse_document(text: &str) -> Result<InvoiceDocument> {
    let invoice_number = HeaderExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .ok_or(ExtractionError::HeaderNotFound)?;

    debug!("Found invoice number {}", invoice_number);

    let items: Vec<_> = line_items(text).collect();
    if items.is_empty() {
        return Err(ExtractionError::NoItemsFound);
    }

    debug!("Recognized {} product lines", items.len());

    InvoiceDocument::new(invoice_number, items)
}

/// DANFE parser with configurable post-parse checks.
pub struct DanfeParser {
    /// Whether to run validation at all.
    validate: bool,
    /// Whether to flag expiry strings that are not calendar dates.
    check_expiry_dates: bool,
    /// Whether to flag empty product names.
    warn_on_empty_name: bool,
    /// Whether to flag conflicting NF-e numbers in one document.
    warn_on_conflicting_numbers: bool,
}

impl DanfeParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            validate: config.validate,
            check_expiry_dates: config.check_expiry_dates,
            warn_on_empty_name: config.warn_on_empty_name,
            warn_on_conflicting_numbers: config.warn_on_conflicting_numbers,
        }
    }

    /// Set validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set expiry date checks.
    pub fn with_expiry_check(mut self, check: bool) -> Self {
        self.check_expiry_dates = check;
        self
    }

    /// Set empty name warnings.
    pub fn with_empty_name_warning(mut self, warn: bool) -> Self {
        self.warn_on_empty_name = warn;
        self
    }

    /// Set conflicting number warnings.
    pub fn with_conflicting_number_warning(mut self, warn: bool) -> Self {
        self.warn_on_conflicting_numbers = warn;
        self
    }

    fn collect_warnings(&self, text: &str, document: &InvoiceDocument) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.validate {
            return warnings;
        }

        if self.warn_on_conflicting_numbers {
            let mut seen = HashSet::new();
            let others: Vec<String> = HeaderExtractor::new()
                .extract_all(text)
                .into_iter()
                .map(|m| m.value)
                .filter(|n| n != document.invoice_number() && seen.insert(n.clone()))
                .collect();

            if !others.is_empty() {
                warnings.push(format!(
                    "NF-e marker also found with other numbers ({}); using {}",
                    others.join(", "),
                    document.invoice_number()
                ));
            }
        }

        for issue in document.issues() {
            let enabled = match issue {
                ValidationIssue::EmptyName { .. } => self.warn_on_empty_name,
                ValidationIssue::InvalidExpiry { .. } => self.check_expiry_dates,
                ValidationIssue::ZeroQuantity { .. } => true,
            };
            if enabled {
                warnings.push(issue.to_string());
            }
        }

        warnings
    }
}

impl Default for DanfeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for DanfeParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let lines_scanned = text.lines().count();

        info!(
            "Parsing DANFE from {} characters ({} lines) of text",
            text.len(),
            lines_scanned
        );

        let document = parse_document(text)?;
        let warnings = self.collect_warnings(text, &document);

        debug!(
            "Extracted NF-e {} with {} items and {} warnings",
            document.invoice_number(),
            document.items().len(),
            warnings.len()
        );

        Ok(ExtractionResult {
            document,
            warnings,
            lines_scanned,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
