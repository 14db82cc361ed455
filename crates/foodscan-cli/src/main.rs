mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "foodscan")]
#[command(about = "Look up food products by barcode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print name, calories, fat, sugar, and protein for each barcode as JSON lines
    Product {
        #[arg(required = true)]
        barcodes: Vec<String>,
    },
    /// Print every nutrient Open Food Facts reports for a barcode
    Nutrients { barcode: String },
    /// Find a barcode in Open Food Facts, falling back to UPCitemdb
    Lookup { barcode: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = foodscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        off_base_url = %config.off_base_url,
        max_concurrent = config.max_concurrent,
        "configuration loaded"
    );

    match cli.command {
        Commands::Product { barcodes } => commands::run_product(&config, barcodes).await,
        Commands::Nutrients { barcode } => commands::run_nutrients(&config, &barcode).await,
        Commands::Lookup { barcode } => commands::run_lookup(&config, &barcode).await,
    }
}

#[cfg(test)]
mod tests;
