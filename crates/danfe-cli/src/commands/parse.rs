//! Parse command - extract data from a single DANFE text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use danfe_core::{DanfeParser, InvoiceParser};

use super::load_config;
use super::output::{format_document, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// DANFE text given directly instead of a file
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report validation issues on stderr
    #[arg(long)]
    validate: bool,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.compact {
        config.output.pretty_json = false;
    }

    let text = read_input(&args)?;

    let mut parser = DanfeParser::from_config(&config.extraction);
    if args.validate {
        parser = parser.with_validation(true);
    }

    let result = parser.parse(&text)?;

    info!(
        "Extracted NF-e {} with {} products",
        result.document.invoice_number(),
        result.document.items().len()
    );

    if args.validate && !result.warnings.is_empty() {
        eprintln!("{}", style("Validation issues:").yellow());
    }
    for warning in &result.warnings {
        warn!("{}", warning);
    }

    let output = format_document(&result.document, args.format, &config.output)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read DANFE text from `--text`, the input file, or stdin, in that order.
fn read_input(args: &ParseArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) => read_text_file(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Read an already-extracted DANFE text file.
pub fn read_text_file(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "pdf" {
        anyhow::bail!(
            "PDF input is not supported: extract the text first and pass the .txt file"
        );
    }

    info!("Reading file: {}", path.display());
    Ok(fs::read_to_string(path)?)
}
