//! Computer-vs-computer games for the terminal.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_core::{Game, GameError, MoveSummary, Player};
use tracing::{info, instrument};

/// Plays random moves for both sides until the game ends.
///
/// X moves first. The same seed always produces the same game.
#[instrument]
pub fn play_random_game(board_length: usize, seed: u64) -> Result<Game, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_board_length(0, board_length)?;
    let mut player = Player::X;
    while !game.outcome().is_terminal() {
        game.make_computer_move_with(&mut rng, player)?;
        player = player.opponent();
    }
    info!(moves = game.moves().len() - 1, outcome = %game.outcome(), "Demo game finished");
    Ok(game)
}

/// One JSON move summary per entry, oldest first.
pub fn render_moves(game: &Game) -> Vec<String> {
    game.moves()
        .iter()
        .map(|m| MoveSummary::from(m).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_game() {
        let a = play_random_game(4, 99).unwrap();
        let b = play_random_game(4, 99).unwrap();
        let boards = |g: &Game| -> Vec<String> {
            g.moves().iter().map(|m| m.board().to_string()).collect()
        };
        assert_eq!(boards(&a), boards(&b));
        assert!(a.outcome().is_terminal());
    }

    #[test]
    fn test_render_moves_includes_initial_board() {
        let game = play_random_game(1, 5).unwrap();
        let rendered = render_moves(&game);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[1].contains("\"X is winner\""));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(
            play_random_game(0, 1).unwrap_err(),
            GameError::InvalidArgument(0)
        );
    }
}
