//! Immutable move snapshots.

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Outcome, Player, Square};
use chrono::{DateTime, Utc};
use tracing::instrument;

/// State of a game after zero or one placements.
///
/// Each move owns its board; later moves clone it rather than share it, so a
/// recorded move never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    index: usize,
    timestamp: DateTime<Utc>,
    board: Board,
    outcome: Outcome,
    mover: Option<Player>,
}

impl Move {
    /// Move 0: an empty board, ongoing, with no mover.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `board_length` is 0 or too
    /// large for a board.
    #[instrument]
    pub fn initial(board_length: usize) -> Result<Self, GameError> {
        Ok(Self {
            index: 0,
            timestamp: Utc::now(),
            board: Board::new(board_length)?,
            outcome: Outcome::Ongoing,
            mover: None,
        })
    }

    /// Derives the next move by placing `player` at `(x, y)`.
    ///
    /// A completed line is scored before a full board, so filling the last
    /// cell with a winning placement is a win.
    ///
    /// # Errors
    ///
    /// [`GameError::GameAlreadyFinished`] if `previous` is terminal, or any
    /// placement error from [`Board::update`].
    #[instrument(skip(previous), fields(previous_index = previous.index))]
    pub fn from_previous(previous: &Move, x: i64, y: i64, player: Player) -> Result<Self, GameError> {
        if previous.outcome.is_terminal() {
            return Err(GameError::GameAlreadyFinished(previous.outcome));
        }

        let mut board = previous.board.clone();
        board.update(x, y, Square::Occupied(player))?;

        // update() accepted the coordinates, so they are in range.
        let won = board.check_winner(x as usize, y as usize, player);
        let outcome = if won {
            player.winning_outcome()
        } else if board.check_draw() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };

        Ok(Self {
            index: previous.index + 1,
            timestamp: Utc::now(),
            board,
            outcome,
            mover: Some(player),
        })
    }

    /// Position in the game's history.
    pub fn index(&self) -> usize {
        self.index
    }

    /// When the move was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Game state after this move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Who played this move; `None` for move 0.
    pub fn mover(&self) -> Option<Player> {
        self.mover
    }
}
