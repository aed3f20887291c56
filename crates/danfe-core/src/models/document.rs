//! DANFE document models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExtractionError;

/// Textual format of the expiry field (`DD/MM/YYYY`).
pub const EXPIRY_FORMAT: &str = "%d/%m/%Y";

/// A single product line recognized on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog code (7 or 8 digits).
    pub code: String,

    /// Product description between the code and the lot marker.
    pub name: String,

    /// Manufacturing lot.
    pub lot: String,

    /// Quantity.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,

    /// Expiry date exactly as printed (`DD/MM/YYYY`).
    pub expiry: String,

    /// Unit price in BRL.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl ProductRecord {
    /// Line total (quantity times unit price); `None` when it does not fit a `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }

    /// Expiry as a calendar date, if the printed text names a real date.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expiry, EXPIRY_FORMAT).ok()
    }
}

/// An extracted DANFE: the invoice number plus at least one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    invoice_number: String,
    items: Vec<ProductRecord>,
}

impl InvoiceDocument {
    /// Build a document, enforcing that both the number and the items are present.
    pub fn new(
        invoice_number: impl Into<String>,
        items: Vec<ProductRecord>,
    ) -> Result<Self, ExtractionError> {
        let invoice_number = invoice_number.into();
        if invoice_number.is_empty() {
            return Err(ExtractionError::HeaderNotFound);
        }
        if items.is_empty() {
            return Err(ExtractionError::NoItemsFound);
        }

        Ok(Self {
            invoice_number,
            items,
        })
    }

    /// Invoice number (digits only).
    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    /// Products in source-line order.
    pub fn items(&self) -> &[ProductRecord] {
        &self.items
    }

    /// Consume the document, returning its products.
    pub fn into_items(self) -> Vec<ProductRecord> {
        self.items
    }

    /// Sum of all line totals; `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.total()?))
    }

    /// Check the document for suspicious values.
    ///
    /// Issues are informational; a document with issues is still a valid document.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (i, item) in self.items.iter().enumerate() {
            let position = i + 1;
            let code = item.code.clone();

            if item.name.is_empty() {
                issues.push(ValidationIssue::EmptyName {
                    position,
                    code: code.clone(),
                });
            }

            if item.expiry_date().is_none() {
                issues.push(ValidationIssue::InvalidExpiry {
                    position,
                    code: code.clone(),
                    expiry: item.expiry.clone(),
                });
            }

            if item.quantity.is_zero() {
                issues.push(ValidationIssue::ZeroQuantity { position, code });
            }
        }

        issues
    }

    /// Validate the document and return any issues found as messages.
    pub fn validate(&self) -> Vec<String> {
        self.issues().iter().map(ToString::to_string).collect()
    }
}

/// A non-fatal oddity in an extracted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The product name came out empty.
    EmptyName { position: usize, code: String },
    /// The printed expiry is not a real calendar date.
    InvalidExpiry {
        position: usize,
        code: String,
        expiry: String,
    },
    /// The quantity is zero.
    ZeroQuantity { position: usize, code: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyName { position, code } => {
                write!(f, "Item {} (code {}): empty product name", position, code)
            }
            ValidationIssue::InvalidExpiry {
                position,
                code,
                expiry,
            } => write!(
                f,
                "Item {} (code {}): expiry {} is not a valid date",
                position, code, expiry
            ),
            ValidationIssue::ZeroQuantity { position, code } => {
                write!(f, "Item {} (code {}): quantity is zero", position, code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(name: &str, quantity: &str, expiry: &str, price: &str) -> ProductRecord {
        ProductRecord {
            code: "1234567".to_string(),
            name: name.to_string(),
            lot: "AB-12".to_string(),
            quantity: Decimal::from_str(quantity).unwrap(),
            expiry: expiry.to_string(),
            unit_price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn test_document_requires_number_and_items() {
        let items = vec![record("Seringa", "2", "01/02/2026", "9.90")];

        assert_eq!(
            InvoiceDocument::new("", items.clone()),
            Err(ExtractionError::HeaderNotFound)
        );
        assert_eq!(
            InvoiceDocument::new("026229", Vec::new()),
            Err(ExtractionError::NoItemsFound)
        );

        let doc = InvoiceDocument::new("026229", items).unwrap();
        assert_eq!(doc.invoice_number(), "026229");
        assert_eq!(doc.items().len(), 1);
    }

    #[test]
    fn test_totals() {
        let doc = InvoiceDocument::new(
            "1",
            vec![
                record("A", "2", "01/02/2026", "9.90"),
                record("B", "1.5", "01/02/2026", "1234.56"),
            ],
        )
        .unwrap();

        assert_eq!(doc.items()[0].total(), Decimal::from_str("19.80").ok());
        assert_eq!(doc.total(), Decimal::from_str("1871.64").ok());
    }

    #[test]
    fn test_totals_overflow_is_none() {
        let huge = record("A", "10000000000000000", "01/01/2027", "10000000000000");
        assert_eq!(huge.total(), None);

        let doc = InvoiceDocument::new(
            "1",
            vec![record("B", "1", "01/01/2027", "1"), huge],
        )
        .unwrap();
        assert_eq!(doc.total(), None);

        let max = Decimal::MAX.to_string();
        let doc = InvoiceDocument::new(
            "1",
            vec![
                record("C", "1", "01/01/2027", &max),
                record("D", "1", "01/01/2027", &max),
            ],
        )
        .unwrap();
        assert_eq!(doc.items()[0].total(), Some(Decimal::MAX));
        assert_eq!(doc.total(), None);
    }

    #[test]
    fn test_expiry_date() {
        assert_eq!(
            record("A", "1", "31/12/2025", "1").expiry_date(),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert_eq!(record("A", "1", "31/02/2025", "1").expiry_date(), None);
    }

    #[test]
    fn test_validate_reports_issues() {
        let doc = InvoiceDocument::new(
            "1",
            vec![
                record("Seringa", "2", "01/02/2026", "9.90"),
                record("", "0", "99/99/2026", "1"),
            ],
        )
        .unwrap();

        let issues = doc.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.starts_with("Item 2")));

        assert_eq!(
            doc.issues()[1],
            ValidationIssue::InvalidExpiry {
                position: 2,
                code: "1234567".to_string(),
                expiry: "99/99/2026".to_string(),
            }
        );
        assert_eq!(issues[1], "Item 2 (code 1234567): expiry 99/99/2026 is not a valid date");
    }

    #[test]
    fn test_serializes_numbers_as_json_numbers() {
        let doc = InvoiceDocument::new("026229", vec![record("Seringa", "1.5", "01/02/2026", "1234.56")])
            .unwrap();

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["invoice_number"], "026229");
        assert_eq!(json["items"][0]["quantity"], 1.5);
        assert_eq!(json["items"][0]["unit_price"], 1234.56);
        assert_eq!(json["items"][0]["expiry"], "01/02/2026");
    }
}
