//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (the human side over HTTP).
    #[display("X")]
    X,
    /// Player O (the computer's default side).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Outcome produced when this player completes a line.
    pub fn winning_outcome(self) -> Outcome {
        match self {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marker = s.trim();
        Player::iter()
            .find(|p| marker.eq_ignore_ascii_case(&p.to_string()))
            .ok_or_else(|| GameError::InvalidValue(marker.to_string()))
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used in the textual board rendering.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Inverse of [`Square::symbol`].
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Square::Empty),
            'X' => Some(Square::Occupied(Player::X)),
            'O' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// The occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(p) => Some(p),
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// Classification of a game at a given move.
///
/// `Ongoing` is the only non-terminal state. The display strings are part of
/// the JSON contract (`game_state`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// Game is still being played.
    #[default]
    #[display("Game still ongoing")]
    Ongoing,
    /// X completed a line.
    #[display("X is winner")]
    XWins,
    /// O completed a line.
    #[display("O is winner")]
    OWins,
    /// Board filled with no winner.
    #[display("Game ended in a draw")]
    Draw,
}

impl Outcome {
    /// Whether no further moves may follow.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// The winning player, for `XWins`/`OWins`.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}
