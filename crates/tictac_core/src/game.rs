//! Append-only game record.

use crate::error::GameError;
use crate::moves::Move;
use crate::types::{Outcome, Player};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::instrument;

/// Board length used when none is requested.
pub const DEFAULT_BOARD_LENGTH: usize = 3;

/// One match: the ordered history of its moves.
///
/// `moves` always starts with the empty-board move and `moves[i].index() == i`.
/// Moves are only ever appended, and a failed move leaves the history as it
/// was.
#[derive(Debug, Clone)]
pub struct Game {
    id: usize,
    started_at: DateTime<Utc>,
    moves: Vec<Move>,
}

impl Game {
    /// Creates a game on a 3×3 board.
    #[instrument]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            moves: vec![Self::empty_board_move()],
        }
    }

    /// Creates a game on a `board_length × board_length` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `board_length` is 0 or too
    /// large for a board.
    #[instrument]
    pub fn with_board_length(id: usize, board_length: usize) -> Result<Self, GameError> {
        Ok(Self {
            id,
            started_at: Utc::now(),
            moves: vec![Move::initial(board_length)?],
        })
    }

    fn empty_board_move() -> Move {
        match Move::initial(DEFAULT_BOARD_LENGTH) {
            Ok(first) => first,
            Err(_) => unreachable!("default board length is positive"),
        }
    }

    /// Game identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// When the game was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The most recent move.
    pub fn current(&self) -> &Move {
        &self.moves[self.moves.len() - 1]
    }

    /// Outcome after the most recent move.
    pub fn outcome(&self) -> Outcome {
        self.current().outcome()
    }

    /// Side length of the board.
    pub fn board_length(&self) -> usize {
        self.current().board().length()
    }

    /// Full move history, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Plays `player` at `(x, y)` and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// [`GameError::GameAlreadyFinished`] once the game has ended, otherwise
    /// any placement error of the board.
    #[instrument(skip(self), fields(game_id = self.id, move_count = self.moves.len()))]
    pub fn make_move(&mut self, x: i64, y: i64, player: Player) -> Result<Outcome, GameError> {
        let current = self.current();
        if current.outcome().is_terminal() {
            return Err(GameError::GameAlreadyFinished(current.outcome()));
        }
        let next = Move::from_previous(current, x, y, player)?;
        let outcome = next.outcome();
        self.moves.push(next);
        Ok(outcome)
    }

    /// Plays `player` on a uniformly random free cell using the thread RNG.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMovesAvailable`] on a full board, or anything
    /// [`Game::make_move`] returns.
    pub fn make_computer_move(&mut self, player: Player) -> Result<Outcome, GameError> {
        self.make_computer_move_with(&mut rand::rng(), player)
    }

    /// Like [`Game::make_computer_move`] with a caller-supplied RNG.
    #[instrument(skip(self, rng), fields(game_id = self.id))]
    pub fn make_computer_move_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        player: Player,
    ) -> Result<Outcome, GameError> {
        let (x, y) = self.current().board().random_available_coordinate(rng)?;
        self.make_move(x as i64, y as i64, player)
    }

    /// Move `index`, or the whole history when `index` is `None`.
    ///
    /// A single move comes back as a one-element slice.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`] if `index` is negative or past the
    /// last move.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn get_moves(&self, index: Option<i64>) -> Result<&[Move], GameError> {
        match index {
            None => Ok(&self.moves),
            Some(i) => {
                let i = self.checked_index(i)?;
                Ok(&self.moves[i..=i])
            }
        }
    }

    /// The move at `index`.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`] if there is no such move.
    pub fn move_at(&self, index: i64) -> Result<&Move, GameError> {
        let i = self.checked_index(index)?;
        Ok(&self.moves[i])
    }

    fn checked_index(&self, index: i64) -> Result<usize, GameError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.moves.len())
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.moves.len(),
            })
    }
}
