//! WASM bindings for DANFE invoice text extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use danfe_core::invoice::rules::{format_brl_amount, parse_brl_amount};
use danfe_core::models::config::ExtractionConfig;
use danfe_core::{DanfeParser, InvoiceDocument, InvoiceParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract the invoice number and products from DANFE text.
///
/// Throws when the text has no NF-e number or no product lines.
#[wasm_bindgen(js_name = parseDocument)]
pub fn parse_document(text: &str) -> Result<JsValue, JsValue> {
    let document = danfe_core::parse_document(text).map_err(to_js_error)?;
    to_js(&document)
}

/// Extract only the invoice number; `undefined` when absent.
#[wasm_bindgen(js_name = extractHeader)]
pub fn extract_header(text: &str) -> Option<String> {
    danfe_core::extract_header(text)
}

/// Recognize a single product line; `null` when the line is not a product.
#[wasm_bindgen(js_name = parseLine)]
pub fn parse_line(line: &str) -> Result<JsValue, JsValue> {
    match danfe_core::parse_line(line) {
        Some(record) => to_js(&record),
        None => Ok(JsValue::NULL),
    }
}

/// Parse a BRL amount (e.g., "1.234,56").
#[wasm_bindgen(js_name = parseBrlAmount)]
pub fn parse_brl_amount_js(amount: &str) -> Option<f64> {
    parse_brl_amount(amount).and_then(|d| d.to_string().parse().ok())
}

/// Format an amount in BRL style (1.234,56).
#[wasm_bindgen(js_name = formatBrlAmount)]
pub fn format_brl_amount_js(amount: f64) -> Option<String> {
    amount
        .to_string()
        .parse()
        .ok()
        .map(format_brl_amount)
}

/// DANFE extractor class for browser use.
#[wasm_bindgen]
pub struct DanfeExtractor {
    config: ExtractionConfig,
}

#[wasm_bindgen]
impl DanfeExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Configure expiry date checks.
    #[wasm_bindgen(js_name = setCheckExpiryDates)]
    pub fn set_check_expiry_dates(&mut self, check: bool) {
        self.config.check_expiry_dates = check;
    }

    /// Configure empty name warnings.
    #[wasm_bindgen(js_name = setWarnOnEmptyName)]
    pub fn set_warn_on_empty_name(&mut self, warn: bool) {
        self.config.warn_on_empty_name = warn;
    }

    /// Extract the document from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser().parse(text).map_err(to_js_error)?;
        to_js(&result.document)
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen(js_name = extractWithMetadata)]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser().parse(text).map_err(to_js_error)?;

        #[derive(serde::Serialize)]
        struct ExtractResult {
            document: InvoiceDocument,
            warnings: Vec<String>,
            lines_scanned: usize,
            processing_time_ms: u64,
        }

        to_js(&ExtractResult {
            document: result.document,
            warnings: result.warnings,
            lines_scanned: result.lines_scanned,
            processing_time_ms: result.processing_time_ms,
        })
    }

    fn parser(&self) -> DanfeParser {
        DanfeParser::from_config(&self.config)
    }
}

impl Default for DanfeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_extract_header() {
        assert_eq!(extract_header("NF-e No. 026229"), Some("026229".to_string()));
        assert_eq!(extract_header("nota fiscal"), None);
    }

    #[wasm_bindgen_test]
    fn test_parse_brl_amount() {
        let amount = parse_brl_amount_js("1.234,56");
        assert!(amount.is_some());
        assert!((amount.unwrap() - 1234.56).abs() < 0.001);
    }

    #[wasm_bindgen_test]
    fn test_format_brl_amount() {
        assert_eq!(format_brl_amount_js(1234.56), Some("1.234,56".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_parse_line_rejects_non_product() {
        assert!(parse_line("VALOR TOTAL R$ 10,00").unwrap().is_null());
    }

    #[wasm_bindgen_test]
    fn test_parse_document_errors() {
        assert!(parse_document("no header").is_err());
    }
}
