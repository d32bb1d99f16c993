//! EcoCart CLI - Command line front end for the EcoGuide shopping assistant.
//!
//! Commands:
//! - `ecocart chat` - Interactive chat session
//! - `ecocart ask` - Answer a single message
//! - `ecocart search` - Run the assistant's product search
//! - `ecocart browse` - List catalog products
//! - `ecocart alternative` - Find a greener alternative for a product
//! - `ecocart catalog` - Show where the catalog came from
//! - `ecocart orders` - Show the order-status reply
//! - `ecocart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AlternativeArgs, AskArgs, BrowseArgs, CatalogArgs, ChatArgs, ConfigArgs, OrdersArgs, SearchArgs};

/// EcoCart CLI - Chat with EcoGuide and explore the eco-friendly catalog
#[derive(Parser)]
#[command(name = "ecocart")]
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
    /// Start an interactive chat with EcoGuide
    Chat(ChatArgs),

    /// Send a single message and print the reply
    Ask(AskArgs),

    /// Search products the way the assistant does
    Search(SearchArgs),

    /// List catalog products, optionally filtered
    Browse(BrowseArgs),

    /// Find a greener alternative for a product
    Alternative(AlternativeArgs),

    /// Show catalog source and size
    Catalog(CatalogArgs),

    /// Show the status of the most recent order
    Orders(OrdersArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Chat(args) => commands::chat::run(args, &ctx).await,
        Commands::Ask(args) => commands::ask::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Alternative(args) => commands::alternative::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`, `debug` with --verbose).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
