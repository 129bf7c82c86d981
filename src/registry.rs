//! In-memory game registry shared by the HTTP handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictac_core::{Game, GameError, GameSummary};
use tracing::{debug, info, instrument};

/// Process-lifetime list of games; a game's id is its position.
///
/// Every access runs under one lock, so moves on the same game are applied
/// one at a time. Games are never removed.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<Mutex<Vec<Game>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    // Core operations never leave a game half-updated, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a game with the next free id.
    #[instrument(skip(self))]
    pub fn create(&self, board_length: usize) -> Result<GameSummary, GameError> {
        let mut games = self.lock();
        let game = Game::with_board_length(games.len(), board_length)?;
        let summary = GameSummary::from(&game);
        info!(game_id = game.id(), board_length, "Created new game");
        games.push(game);
        Ok(summary)
    }

    /// Summaries of every game, by id.
    #[instrument(skip(self))]
    pub fn summaries(&self) -> Vec<GameSummary> {
        let games = self.lock();
        debug!(count = games.len(), "Listed games");
        games.iter().map(GameSummary::from).collect()
    }

    /// Runs `f` on game `id` while holding the registry lock.
    ///
    /// Returns `None` if there is no such game.
    #[instrument(skip(self, f))]
    pub fn with_game<T>(&self, id: usize, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        let mut games = self.lock();
        let result = games.get_mut(id).map(f);
        if result.is_none() {
            debug!(game_id = id, "Game not found");
        }
        result
    }

    /// Number of games created so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no game has been created.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{Outcome, Player};

    #[test]
    fn test_ids_follow_creation_order() {
        let registry = GameRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.create(3).unwrap().game_id, 0);
        assert_eq!(registry.create(5).unwrap().game_id, 1);
        assert_eq!(registry.len(), 2);
        assert!(registry.create(0).is_err());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_with_game_mutates_shared_state() {
        let registry = GameRegistry::new();
        registry.create(3).unwrap();
        let clone = registry.clone();

        let outcome = clone.with_game(0, |game| game.make_move(1, 1, Player::X));
        assert_eq!(outcome, Some(Ok(Outcome::Ongoing)));
        assert_eq!(registry.summaries()[0].last_played, Some(Player::X));
        assert!(registry.with_game(9, |game| game.id()).is_none());
    }

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let registry = GameRegistry::new();
        registry.create(10).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for _ in 0..5 {
                        registry
                            .with_game(0, |game| game.make_computer_move(Player::O))
                            .expect("game exists")
                            .ok();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread finished");
        }

        registry.with_game(0, |game| {
            for (i, m) in game.moves().iter().enumerate() {
                assert_eq!(m.index(), i);
            }
            let played = game.moves().len() - 1;
            assert_eq!(game.current().board().available_count(), 100 - played);
        });
    }
}
