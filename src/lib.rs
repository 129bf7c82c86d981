//! Tic-tac-toe game server.
//!
//! Serves the games of [`tictac_core`] over HTTP. Games live in an in-memory
//! [`GameRegistry`] for the lifetime of the process.
//!
//! # Architecture
//!
//! - **Registry**: shared, lock-guarded list of games; ids are positions
//! - **Server**: axum routes for `/games` and `/moves`
//! - **Config**: TOML file, `PORT` environment variable and CLI overrides
//!
//! # Example
//!
//! ```no_run
//! use tictac_server::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default().with_port(8080);
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod demo;
mod error;
mod registry;
mod server;

pub mod cli;

pub use config::{ConfigError, ServerConfig};
pub use demo::{play_random_game, render_moves};
pub use error::ApiError;
pub use registry::GameRegistry;
pub use server::{AppState, CoordinateForm, GamesParams, MovesParams, router, serve};
