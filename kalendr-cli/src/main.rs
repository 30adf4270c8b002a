mod client;
mod commands;
mod controller;
mod dialog;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kalendr_core::KalendrConfig;

use crate::client::EventsClient;

#[derive(Parser)]
#[command(name = "kalendr")]
#[command(about = "Browse and manage your kalendr events from the terminal")]
struct Cli {
    /// Base URL of the events API (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, soonest first
    Events,
    /// Create a new event
    New {
        /// Start date/time (e.g. "2025-03-20T15:00" or "tomorrow 3pm");
        /// a date without a time makes the event all-day
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Open the interactive calendar session
    Open,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = connect(cli.api_url)?;

    match cli.command {
        Commands::Events => commands::events::run(client).await,
        Commands::New { start, end } => commands::new::run(client, start, end).await,
        Commands::Open => commands::open::run(client).await,
    }
}

fn connect(api_url: Option<String>) -> Result<EventsClient> {
    let base_url = match api_url {
        Some(url) => url,
        None => KalendrConfig::load()?.api_url,
    };

    Ok(EventsClient::new(base_url))
}
