//! N×N tic-tac-toe board.

use crate::available::AvailableSet;
use crate::error::{GameError, ParseBoardError};
use crate::types::{Player, Square};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Square board of `length × length` cells.
///
/// Cells are stored row-major: `(x, y)` lives at `y * length + x`, with `y`
/// the row and `x` the column. The availability set always holds exactly the
/// empty cells, and an occupied cell is never cleared. `Clone` is a deep copy
/// of both.
#[derive(Debug, Clone)]
pub struct Board {
    length: usize,
    cells: Vec<Square>,
    available: AvailableSet,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `length` is 0 or its square
    /// does not fit in `usize`.
    #[instrument]
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length < 1 {
            return Err(GameError::InvalidArgument(length));
        }
        let size = length
            .checked_mul(length)
            .ok_or(GameError::InvalidArgument(length))?;
        Ok(Self {
            length,
            cells: vec![Square::Empty; size],
            available: AvailableSet::full(size),
        })
    }

    /// Side length of the board.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Square at column `x`, row `y`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Square> {
        if x >= self.length || y >= self.length {
            return None;
        }
        self.cells.get(self.coord_to_number(x, y)).copied()
    }

    /// Whether `(x, y)` is on the board and unplayed.
    pub fn is_available(&self, x: usize, y: usize) -> bool {
        x < self.length && y < self.length && self.available.contains(self.coord_to_number(x, y))
    }

    /// Number of unplayed cells.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.cells.chunks(self.length)
    }

    /// Validates a placement without applying it.
    ///
    /// Checks, in order: both coordinates inside `[0, length)`, the cell is
    /// unplayed, and `value` is a player marker.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`], [`GameError::CellOccupied`] or
    /// [`GameError::InvalidValue`].
    #[instrument(skip(self), fields(length = self.length))]
    pub fn check_validity(&self, x: i64, y: i64, value: Square) -> Result<(), GameError> {
        let (cx, cy) = self.checked_coord(x, y)?;
        if !self.available.contains(self.coord_to_number(cx, cy)) {
            return Err(GameError::CellOccupied { x: cx, y: cy });
        }
        if value.player().is_none() {
            return Err(GameError::InvalidValue(value.symbol().to_string()));
        }
        Ok(())
    }

    /// Places `value` at `(x, y)` after [`Board::check_validity`].
    ///
    /// Mutates in place; clone first to keep the previous state.
    #[instrument(skip(self), fields(length = self.length))]
    pub fn update(&mut self, x: i64, y: i64, value: Square) -> Result<(), GameError> {
        self.check_validity(x, y, value)?;
        let (cx, cy) = self.checked_coord(x, y)?;
        let n = self.coord_to_number(cx, cy);
        self.cells[n] = value;
        self.available.remove(n);
        Ok(())
    }

    /// Whether the lines through `(x, y)` are filled by `player`.
    ///
    /// Only row `y`, column `x` and the two main diagonals are inspected, so
    /// the check costs O(length). A diagonal that does not pass through the
    /// last placement cannot be complete after it, so both are always
    /// checked. On a 1×1 board the first placement wins.
    #[instrument(skip(self), fields(length = self.length))]
    pub fn check_winner(&self, x: usize, y: usize, player: Player) -> bool {
        if x >= self.length || y >= self.length {
            return false;
        }
        let target = Square::Occupied(player);
        let n = self.length;
        let line = |f: &dyn Fn(usize) -> usize| (0..n).all(|i| self.cells[f(i)] == target);

        line(&|i| y * n + i)
            || line(&|i| i * n + x)
            || line(&|i| i * n + i)
            || line(&|i| i * n + (n - 1 - i))
    }

    /// Whether every cell has been played.
    pub fn check_draw(&self) -> bool {
        self.available.is_empty()
    }

    /// Uniformly random unplayed coordinate `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMovesAvailable`] on a full board.
    #[instrument(skip(self, rng), fields(available = self.available.len()))]
    pub fn random_available_coordinate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        self.available
            .choose(rng)
            .map(|n| self.number_to_coord(n))
            .ok_or(GameError::NoMovesAvailable)
    }

    fn checked_coord(&self, x: i64, y: i64) -> Result<(usize, usize), GameError> {
        let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < self.length);
        match (in_range(x), in_range(y)) {
            (Some(cx), Some(cy)) => Ok((cx, cy)),
            _ => Err(GameError::OutOfBounds {
                x,
                y,
                length: self.length,
            }),
        }
    }

    fn coord_to_number(&self, x: usize, y: usize) -> usize {
        y * self.length + x
    }

    fn number_to_coord(&self, n: usize) -> (usize, usize) {
        (n % self.length, n / self.length)
    }
}

/// Boards are equal when their cells are; the availability set follows
/// from the cells.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.cells == other.cells
    }
}

impl Eq for Board {}

/// One row per line, cells joined by `,` (`X`, `O`, `.` for empty).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "{}", line.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let length = rows.len();
        if length == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut cells = Vec::with_capacity(length * length);
        let mut available = AvailableSet::empty(length * length);
        for (row, line) in rows.iter().enumerate() {
            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() != length {
                return Err(ParseBoardError::NotSquare {
                    row,
                    found: parts.len(),
                    expected: length,
                });
            }
            for part in parts {
                let mut chars = part.chars();
                let square = match (chars.next(), chars.next()) {
                    (Some(c), None) => Square::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| ParseBoardError::InvalidCell {
                    row,
                    cell: part.to_string(),
                })?;
                if square == Square::Empty {
                    available.insert(cells.len());
                }
                cells.push(square);
            }
        }

        Ok(Self {
            length,
            cells,
            available,
        })
    }
}
