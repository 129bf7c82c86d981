//! Tic-tac-toe game logic for N×N boards.
//!
//! A [`Game`] is an append-only list of [`Move`]s. Each move owns a deep copy
//! of the [`Board`] after its placement together with the resulting
//! [`Outcome`], so any point of a game's history can be served without
//! replaying it.
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, Outcome, Player};
//!
//! let mut game = Game::new(0);
//! game.make_move(0, 0, Player::X)?;
//! game.make_move(0, 1, Player::O)?;
//! game.make_move(1, 0, Player::X)?;
//! game.make_move(1, 1, Player::O)?;
//! assert_eq!(game.make_move(2, 0, Player::X)?, Outcome::XWins);
//! assert_eq!(game.moves().len(), 6);
//! # Ok::<(), tictac_core::GameError>(())
//! ```
//!
//! The crate performs no I/O and holds no locks; callers sharing a game
//! across threads must serialize access themselves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod available;
mod board;
mod error;
mod game;
mod moves;
mod summary;
mod types;

pub use board::Board;
pub use error::{GameError, ParseBoardError};
pub use game::{DEFAULT_BOARD_LENGTH, Game};
pub use moves::Move;
pub use summary::{GameSummary, MoveSummary};
pub use types::{Outcome, Player, Square};
