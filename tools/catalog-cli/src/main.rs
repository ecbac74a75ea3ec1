//! Catalog CLI - Command line harness for the showroom catalog engine.
//!
//! Commands:
//! - `catalog browse` - Search, sort, and group a product fixture
//! - `catalog price` - Price breakdown for one product
//! - `catalog sku` - Derive a SKU from descriptive fields
//! - `catalog keywords` - Show the search keyword index for products
//! - `catalog views` - List the saved view modes

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, KeywordsArgs, PriceArgs, SkuArgs};

/// Catalog CLI - Browse and price a furniture catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, sort, and group the catalog
    Browse(BrowseArgs),

    /// Show the price breakdown for a product
    Price(PriceArgs),

    /// Derive a SKU from descriptive fields
    Sku(SkuArgs),

    /// Show the search keyword index for products
    Keywords(KeywordsArgs),

    /// List saved view modes
    Views,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library events go to stderr; RUST_LOG overrides the verbosity flag.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Price(args) => commands::price::run(args, &ctx),
        Commands::Sku(args) => commands::sku::run(args, &ctx),
        Commands::Keywords(args) => commands::keywords::run(args, &ctx),
        Commands::Views => commands::views::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
