use analytics::{SalesAnalyticsEngine, SellerResult, parse_sales_data};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Cell, CellAlignment, Table};
use configuration::{Config, Logging, OutputFormat};
use core_types::SalesData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// The main entry point for the sales report application.
fn main() -> Result<()> {
    // A missing .env file is fine; it only supplies optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit.
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Validate(args) => handle_validate(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller sales statistics: revenue, profit, bonus and best-selling products.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to an optional `config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a sales dataset and print the ranked seller report.
    Report(ReportArgs),
    /// Check that a sales dataset is well-formed without running the report.
    Validate(ValidateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The JSON dataset with `sellers`, `products` and `purchase_records`.
    #[arg(long)]
    input: PathBuf,

    /// Output format. Defaults to `report.format` from the configuration.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// How many top products to list per seller, overriding the configuration.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    top: Option<u64>,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ValidateArgs {
    /// The JSON dataset to check.
    #[arg(long)]
    input: PathBuf,
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. Console output goes to stderr
/// so that a JSON report on stdout stays machine-readable.
fn init_tracing(logging: &Logging) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "sales-report.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load_dataset(path: &Path) -> Result<SalesData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let data = parse_sales_data(&json)
        .with_context(|| format!("Dataset {} is not usable", path.display()))?;
    Ok(data)
}

/// Handles the orchestration of the report process.
fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let data = load_dataset(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Dataset loaded."
    );

    let mut settings = config.analytics.clone();
    if let Some(top) = args.top {
        settings.top_products_limit = usize::try_from(top).context("--top is too large")?;
    }

    let engine = SalesAnalyticsEngine::from_settings(&settings);
    let results = engine.calculate(&data)?;

    let rendered = match args.format.unwrap_or(config.report.format) {
        OutputFormat::Table => render_table(&results).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered + "\n")
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(output = %path.display(), "Report written.");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Parses the dataset, then reports its size and any suspicious line items.
fn handle_validate(args: ValidateArgs) -> Result<()> {
    let data = load_dataset(&args.input)?;
    SalesAnalyticsEngine::validate(&data)?;

    for issue in data.integrity_issues() {
        tracing::warn!("{issue}");
    }

    println!(
        "{} is valid: {} sellers, {} products, {} purchase records",
        args.input.display(),
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len()
    );
    Ok(())
}

/// Renders the ranked sellers as a terminal table.
fn render_table(results: &[SellerResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Rank", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top products",
    ]);

    for (rank, result) in results.iter().enumerate() {
        let top_products = result
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&result.seller_id),
            Cell::new(&result.name),
            Cell::new(format!("{:.2}", result.revenue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", result.profit)).set_alignment(CellAlignment::Right),
            Cell::new(result.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", result.bonus)).set_alignment(CellAlignment::Right),
            Cell::new(top_products),
        ]);
    }

    table
}
