//! Command-line interface for chess_two.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Chess 2 - terminal storefront and character picker
#[derive(Parser, Debug)]
#[command(name = "chess_two")]
#[command(about = "Terminal storefront and character picker for Chess 2", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `lobby`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the storefront TUI
    Lobby(LobbyArgs),

    /// Print the catalog and exit
    Catalog {
        /// Catalog TOML file (defaults to $CHESS_TWO_CATALOG, then built-in data)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print as JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
}

/// Options for the storefront TUI.
#[derive(Args, Debug, Default)]
pub struct LobbyArgs {
    /// Catalog TOML file (defaults to $CHESS_TWO_CATALOG, then built-in data)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Settings TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Carousel settle delay in milliseconds
    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    /// Drag distance in columns that must be exceeded to browse
    #[arg(long)]
    pub drag_threshold: Option<i32>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
