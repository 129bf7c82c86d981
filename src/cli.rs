//! Command-line interface for tictac_server.

use clap::{Parser, Subcommand};

/// Tic-tac-toe game tracking over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictac_server")]
#[command(about = "Tic-tac-toe game server with a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Http {
        /// Path to a TOML server config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Play a computer-vs-computer game and print every move
    Demo {
        /// Board length
        #[arg(short, long, default_value = "3")]
        board_length: usize,

        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
