//! JSON views of games and moves.
//!
//! These are the shapes handed to HTTP clients. Field names are fixed;
//! `board_state` is the board's row-per-line rendering and `game_state` the
//! outcome's display string.

use crate::game::Game;
use crate::moves::Move;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a game at its latest move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game identifier.
    pub game_id: usize,
    /// Creation time, RFC 3339.
    pub started_time: String,
    /// Rendered current board.
    pub board_state: String,
    /// Player of the latest move, `null` before the first.
    pub last_played: Option<Player>,
    /// Outcome text.
    pub game_state: String,
}

/// Summary of a single move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Move index within its game.
    pub move_id: usize,
    /// Creation time, RFC 3339.
    pub timestamp: String,
    /// Player of this move, `null` for move 0.
    pub last_moved: Option<Player>,
    /// Rendered board after the move.
    pub board_state: String,
    /// Outcome text.
    pub game_state: String,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        let current = game.current();
        Self {
            game_id: game.id(),
            started_time: game.started_at().to_rfc3339(),
            board_state: current.board().to_string(),
            last_played: current.mover(),
            game_state: current.outcome().to_string(),
        }
    }
}

impl From<&Move> for MoveSummary {
    fn from(m: &Move) -> Self {
        Self {
            move_id: m.index(),
            timestamp: m.timestamp().to_rfc3339(),
            last_moved: m.mover(),
            board_state: m.board().to_string(),
            game_state: m.outcome().to_string(),
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_game_summary_shape() {
        let mut game = Game::new(4);
        let fresh = serde_json::to_value(GameSummary::from(&game)).unwrap();
        assert_eq!(fresh["game_id"], json!(4));
        assert_eq!(fresh["last_played"], Value::Null);
        assert_eq!(fresh["game_state"], json!("Game still ongoing"));
        assert_eq!(fresh["board_state"], json!(".,.,.\n.,.,.\n.,.,."));

        game.make_move(0, 0, Player::X).unwrap();
        let played = serde_json::to_value(GameSummary::from(&game)).unwrap();
        assert_eq!(played["last_played"], json!("X"));
        assert_eq!(played["board_state"], json!("X,.,.\n.,.,.\n.,.,."));
        assert!(played["started_time"].is_string());

        let keys: Vec<_> = played.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["board_state", "game_id", "game_state", "last_played", "started_time"]
        );
    }

    #[test]
    fn test_move_summary_shape() {
        let mut game = Game::with_board_length(0, 1).unwrap();
        game.make_move(0, 0, Player::O).unwrap();
        let first = serde_json::to_value(MoveSummary::from(game.move_at(0).unwrap())).unwrap();
        let second = serde_json::to_value(MoveSummary::from(game.move_at(1).unwrap())).unwrap();

        assert_eq!(first["move_id"], json!(0));
        assert_eq!(first["last_moved"], Value::Null);
        assert_eq!(second["move_id"], json!(1));
        assert_eq!(second["last_moved"], json!("O"));
        assert_eq!(second["board_state"], json!("O"));
        assert_eq!(second["game_state"], json!("O is winner"));
    }

    #[test]
    fn test_display_is_json() {
        let summary = GameSummary::from(&Game::new(1));
        let parsed: GameSummary = serde_json::from_str(&summary.to_string()).unwrap();
        assert_eq!(parsed, summary);
    }
}
