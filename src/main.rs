//! tictac_server - unified CLI
//!
//! Runs the HTTP game server or a terminal demo game.

use anyhow::Result;
use clap::Parser;
use tictac_server::cli::{Cli, Command};
use tictac_server::{ServerConfig, play_random_game, render_moves, serve};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { config, port, host } => run_http_server(config, host, port).await,
        Command::Demo { board_length, seed } => run_demo(board_length, seed),
    }
}

/// Run the HTTP game server
#[instrument]
async fn run_http_server(
    config_path: Option<std::path::PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .apply_env()?;

    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    info!(host = %config.host(), port = config.port(), "Starting tic-tac-toe HTTP server");
    serve(config).await
}

/// Play and print a seeded computer-vs-computer game
#[instrument]
fn run_demo(board_length: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "Playing demo game");

    let game = play_random_game(board_length, seed)?;
    for rendered in render_moves(&game) {
        println!("{}", rendered);
    }
    println!("{}", game.outcome());
    Ok(())
}
