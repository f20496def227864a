//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe game logic with terminal play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game, both players at one keyboard
    Play,

    /// Run a scripted demonstration game
    Demo,
}
