//! Command-line interface for connectn_setup.

use clap::{Parser, Subcommand};

/// Connect-N Setup - configure a board and hand it to the game
#[derive(Parser, Debug)]
#[command(name = "connectn_setup")]
#[command(about = "Board setup screen for two-player Connect-N", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "connectn_setup.toml")]
    pub config: std::path::PathBuf,

    /// Log file for the terminal UI
    #[arg(long, global = true, default_value = "connectn_setup.log")]
    pub log_file: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive setup screen
    Play,

    /// Check a board configuration without the UI
    Check {
        /// Board width, as typed
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Board height, as typed
        #[arg(allow_hyphen_values = true)]
        height: String,
        /// Run length needed to win, as typed
        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// Run a headless setup and print the hand-off payload as JSON
    Handoff {
        /// Board width, as typed
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Board height, as typed
        #[arg(allow_hyphen_values = true)]
        height: String,
        /// Run length needed to win, as typed
        #[arg(allow_hyphen_values = true)]
        n: String,
        /// First player's name
        #[arg(default_value = "")]
        player1: String,
        /// Second player's name
        #[arg(default_value = "")]
        player2: String,
    },

    /// Print the default settings file
    DefaultConfig,
}
