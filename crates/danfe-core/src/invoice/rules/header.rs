//! Invoice number (NF-e) extraction.

use super::patterns::INVOICE_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Invoice number extractor.
pub struct HeaderExtractor;

impl HeaderExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for HeaderExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        INVOICE_NUMBER.captures(text).and_then(|caps| to_match(&caps))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        INVOICE_NUMBER
            .captures_iter(text)
            .filter_map(|caps| to_match(&caps))
            .collect()
    }
}

fn to_match(caps: &regex::Captures<'_>) -> Option<ExtractionMatch<String>> {
    let full_match = caps.get(0)?;
    Some(
        ExtractionMatch::new(caps[1].to_string(), full_match.as_str())
            .with_position(full_match.start(), full_match.end()),
    )
}

/// Extract the invoice number: the digits after the first `NF-e` marker.
pub fn extract_header(text: &str) -> Option<String> {
    HeaderExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_header_variants() {
        assert_eq!(extract_header("NF-e No. 026229"), Some("026229".to_string()));
        assert_eq!(extract_header("NF-e Nº 026229"), Some("026229".to_string()));
        assert_eq!(extract_header("NF-e N° 026229"), Some("026229".to_string()));
        assert_eq!(extract_header("NF-e 026229"), Some("026229".to_string()));
        assert_eq!(extract_header("NF-e026229"), Some("026229".to_string()));
        assert_eq!(extract_header("nf-e no 026229"), Some("026229".to_string()));
    }

    #[test]
    fn test_extract_header_first_match_wins() {
        let text = "DANFE\nNF-e No. 000111\n...\nNF-e No. 000222";
        assert_eq!(extract_header(text), Some("000111".to_string()));
    }

    #[test]
    fn test_extract_header_not_found() {
        assert_eq!(extract_header("Nota fiscal 026229"), None);
        assert_eq!(extract_header("NF-e No. ABC"), None);
        assert_eq!(extract_header(""), None);
    }

    #[test]
    fn test_extract_all_positions() {
        let text = "NF-e 1 / NF-e No. 22";
        let matches = HeaderExtractor::new().extract_all(text);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].value, "1");
        assert_eq!(matches[0].position, Some((0, 6)));
        assert_eq!(matches[1].value, "22");
        assert_eq!(matches[1].source, "NF-e No. 22");
    }
}
