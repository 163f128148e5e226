//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alatheme")]
#[command(author, version, about = "TUI theme picker for Alacritty with live preview")]
pub struct Cli {
    /// Path to the alatheme configuration file (default: .alatheme.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed themes without starting the TUI
    List,
    /// Print the currently active theme path
    Current,
}
