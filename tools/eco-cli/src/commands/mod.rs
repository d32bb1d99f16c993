//! CLI command implementations.

pub mod alternative;
pub mod ask;
pub mod browse;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod orders;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    /// Messages to send before prompting (handy for scripted demos).
    #[arg(short, long)]
    pub message: Vec<String>,
}

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// Message to send.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl AskArgs {
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search words.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Filter by name, brand or material.
    #[arg(default_value = "")]
    pub term: String,

    /// Show only products of this tier or better (high, medium, low).
    #[arg(short, long)]
    pub tier: Option<String>,
}

/// Arguments for the alternative command.
#[derive(Args)]
pub struct AlternativeArgs {
    /// Product ID.
    pub product: String,

    /// Ask the assistant to explain why the alternative is greener.
    #[arg(short, long)]
    pub explain: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// List every rejected record.
    #[arg(long)]
    pub rejected: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// List every order, not just the latest.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
