//! Chess 2 - terminal storefront
//!
//! Runs the storefront TUI or prints the catalog.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use chess_two::{Catalog, StorefrontSettings, run_tui};
use clap::Parser;
use cli::{Cli, Command, LobbyArgs};
use tracing::instrument;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Lobby(args)) => run_lobby(args).await,
        Some(Command::Catalog { catalog, json }) => print_catalog(catalog, json),
        None => run_lobby(LobbyArgs::default()).await,
    }
}

/// Resolves settings from file and flags, then runs the TUI.
async fn run_lobby(args: LobbyArgs) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => StorefrontSettings::from_file(path)?,
        None => StorefrontSettings::new(),
    };
    if let Some(catalog) = args.catalog {
        settings = settings.with_catalog(catalog);
    }
    if let Some(ms) = args.settle_delay_ms {
        settings = settings.with_settle_delay_ms(ms);
    }
    if let Some(threshold) = args.drag_threshold {
        settings = settings.with_drag_threshold(threshold);
    }
    if let Some(log_file) = args.log_file {
        settings = settings.with_log_file(log_file);
    }

    run_tui(settings).await
}

/// Prints the catalog to stdout.
#[instrument]
fn print_catalog(path: Option<std::path::PathBuf>, json: bool) -> Result<()> {
    let catalog = Catalog::load(path.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("Characters:");
    for item in catalog.characters().items() {
        println!("  {:<10} {}", item.id(), item.display_name());
    }
    println!();
    println!("Cards:");
    for card in catalog.cards() {
        println!("  {}. {} {}", card.id(), card.title(), card.price());
        println!("     {}", card.description());
        for piece in card.piece_roles() {
            println!("     - {:<7} {}", piece.role().to_string(), piece.name());
        }
    }
    Ok(())
}
