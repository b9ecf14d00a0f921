use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paypal_checkout::application::encoder::OrderEncoder;
use paypal_checkout::infrastructure::html::HtmlFormRenderer;
use paypal_checkout::interfaces::csv::field_writer::FieldWriter;
use paypal_checkout::interfaces::csv::line_item_reader::LineItemReader;
use paypal_checkout::interfaces::order_file::OrderFile;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Ready-to-embed HTML checkout form
    Html,
    /// The encoded gateway fields as name,value CSV
    Fields,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Basket CSV file (item_name and amount columns are required)
    basket: PathBuf,

    /// JSON file describing the merchant, buyer, shipping and presentation
    #[arg(long)]
    order: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut encoder = OrderEncoder::new();
    if let Some(order_path) = cli.order {
        let file = File::open(order_path).into_diagnostic()?;
        OrderFile::from_reader(file).into_diagnostic()?.apply(&mut encoder);
    }

    // Bad rows are reported and skipped; the rest of the basket still goes out.
    let file = File::open(cli.basket).into_diagnostic()?;
    let reader = LineItemReader::new(file);
    for (row, item_result) in reader.line_items().enumerate() {
        match item_result {
            Ok(item) => {
                if let Err(e) = encoder.append_line_item(item) {
                    warn!(row = row + 1, "Error adding line item: {}", e);
                }
            }
            Err(e) => {
                warn!(row = row + 1, "Error reading line item: {}", e);
            }
        }
    }
    info!(items = encoder.basket().len(), "Basket loaded");

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Html => {
            let html = encoder
                .generate_form(&HtmlFormRenderer::new())
                .into_diagnostic()?;
            let mut out = stdout.lock();
            writeln!(out, "{html}").into_diagnostic()?;
        }
        OutputFormat::Fields => {
            let fields = encoder.encode().into_diagnostic()?;
            let mut writer = FieldWriter::new(stdout.lock());
            writer.write_fields(&fields).into_diagnostic()?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
