//! Rendering of extracted documents.

use danfe_core::invoice::rules::format_brl_amount;
use danfe_core::models::config::OutputConfig;
use danfe_core::InvoiceDocument;
use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per product
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format to disk.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_document(
    document: &InvoiceDocument,
    format: OutputFormat,
    config: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if config.pretty_json {
                Ok(serde_json::to_string_pretty(document)?)
            } else {
                Ok(serde_json::to_string(document)?)
            }
        }
        OutputFormat::Csv => format_csv(document),
        OutputFormat::Text => Ok(format_text(document, config.include_totals)),
    }
}

/// Placeholder for a total too large to represent.
pub const TOTAL_UNAVAILABLE: &str = "n/a";

/// Plain decimal total, or `n/a` when it overflowed.
pub fn display_total(total: Option<Decimal>) -> String {
    total.map_or_else(|| TOTAL_UNAVAILABLE.to_string(), |t| t.to_string())
}

fn brl_total(total: Option<Decimal>) -> String {
    total.map_or_else(
        || TOTAL_UNAVAILABLE.to_string(),
        |t| format!("R$ {}", format_brl_amount(t)),
    )
}

fn format_csv(document: &InvoiceDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "invoice_number",
        "code",
        "name",
        "lot",
        "quantity",
        "expiry",
        "unit_price",
        "total",
    ])?;

    for item in document.items() {
        wtr.write_record([
            document.invoice_number(),
            item.code.as_str(),
            item.name.as_str(),
            item.lot.as_str(),
            item.quantity.to_string().as_str(),
            item.expiry.as_str(),
            item.unit_price.to_string().as_str(),
            display_total(item.total()).as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(document: &InvoiceDocument, include_totals: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("NF-e: {}\n", document.invoice_number()));
    output.push_str(&format!("Products: {}\n", document.items().len()));
    output.push('\n');

    for (i, item) in document.items().iter().enumerate() {
        output.push_str(&format!("{:>3}. {} {}\n", i + 1, item.code, item.name));
        output.push_str(&format!(
            "     Lot: {}  Qty: {}  Expiry: {}\n",
            item.lot, item.quantity, item.expiry
        ));
        output.push_str(&format!(
            "     Unit price: R$ {}",
            format_brl_amount(item.unit_price)
        ));
        if include_totals {
            output.push_str(&format!("  Total: {}", brl_total(item.total())));
        }
        output.push('\n');
    }

    if include_totals {
        output.push_str(&format!("\nTotal: {}\n", brl_total(document.total())));
    }

    output
}
