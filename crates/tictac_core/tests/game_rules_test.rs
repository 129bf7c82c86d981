//! Game-level behavior: history invariants, win and draw scenarios.

use tictac_core::{Board, Game, GameError, Outcome, Player, Square};

fn play(game: &mut Game, moves: &[(i64, i64, Player)]) -> Outcome {
    let mut outcome = game.outcome();
    for &(x, y, p) in moves {
        outcome = game.make_move(x, y, p).expect("valid move");
    }
    outcome
}

#[test]
fn test_fresh_game_for_any_length() {
    for length in 1..=7 {
        let game = Game::with_board_length(0, length).expect("positive length");
        let moves = game.get_moves(None).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].index(), 0);
        assert_eq!(moves[0].outcome(), Outcome::Ongoing);
        assert_eq!(moves[0].board(), &Board::new(length).unwrap());
        assert_eq!(moves[0].board().available_count(), length * length);
    }
}

#[test]
fn test_indices_match_positions() {
    let mut game = Game::with_board_length(3, 5).unwrap();
    play(
        &mut game,
        &[
            (4, 4, Player::X),
            (1, 2, Player::O),
            (0, 0, Player::X),
            (3, 1, Player::O),
        ],
    );
    for (i, m) in game.moves().iter().enumerate() {
        assert_eq!(m.index(), i);
    }
    assert_eq!(
        game.move_at(2).unwrap().board().get(1, 2),
        Some(Square::Occupied(Player::O))
    );
}

#[test]
fn test_x_wins_bottom_row() {
    let mut game = Game::new(0);
    let outcome = play(
        &mut game,
        &[
            (0, 2, Player::X),
            (0, 1, Player::O),
            (1, 2, Player::X),
            (0, 0, Player::O),
            (2, 2, Player::X),
        ],
    );
    assert_eq!(outcome, Outcome::XWins);
    assert_eq!(game.current().index(), 5);
    assert_eq!(game.current().mover(), Some(Player::X));
}

#[test]
fn test_draw_on_full_board() {
    let mut game = Game::new(0);
    let outcome = play(
        &mut game,
        &[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 1, Player::O),
            (1, 0, Player::X),
            (1, 2, Player::O),
            (2, 1, Player::X),
            (2, 0, Player::O),
        ],
    );
    assert_eq!(outcome, Outcome::Ongoing);
    assert_eq!(game.make_move(2, 2, Player::X), Ok(Outcome::Draw));
    assert_eq!(game.current().index(), 9);
}

#[test]
fn test_moves_after_finish_rejected() {
    // A full board has no cell to draw; a partly filled one is still finished.
    let cases: [(usize, Vec<(i64, i64, Player)>, GameError); 2] = [
        (1, vec![(0, 0, Player::X)], GameError::NoMovesAvailable),
        (
            2,
            vec![(0, 0, Player::O), (1, 0, Player::X), (0, 1, Player::O)],
            GameError::GameAlreadyFinished(Outcome::OWins),
        ),
    ];
    for (length, moves, computer_err) in cases {
        let mut game = Game::with_board_length(0, length).unwrap();
        let outcome = play(&mut game, &moves);
        assert!(outcome.is_terminal());
        let len = game.moves().len();

        assert_eq!(
            game.make_move(1, 1, Player::X),
            Err(GameError::GameAlreadyFinished(outcome))
        );
        assert_eq!(game.make_computer_move(Player::O), Err(computer_err));
        assert_eq!(game.moves().len(), len);
    }
}

#[test]
fn test_invalid_moves_leave_history() {
    let mut game = Game::new(0);
    play(&mut game, &[(0, 2, Player::X), (1, 2, Player::O)]);

    assert_eq!(
        game.make_move(0, 2, Player::O),
        Err(GameError::CellOccupied { x: 0, y: 2 })
    );
    assert!(matches!(
        game.make_move(3, 3, Player::X),
        Err(GameError::OutOfBounds { length: 3, .. })
    ));
    assert_eq!(game.moves().len(), 3);
    assert_eq!(game.outcome(), Outcome::Ongoing);
}

#[test]
fn test_get_moves_by_index() {
    let mut game = Game::new(0);
    play(
        &mut game,
        &[(0, 0, Player::X), (1, 1, Player::O), (2, 2, Player::X)],
    );
    let n = 3;
    assert_eq!(game.get_moves(None).unwrap().len(), n + 1);
    for k in 0..=n {
        let single = game.get_moves(Some(k as i64)).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].index(), k);
    }
    assert_eq!(
        game.get_moves(Some(n as i64 + 1)).unwrap_err(),
        GameError::IndexOutOfRange { index: 4, len: 4 }
    );
    assert!(matches!(
        game.get_moves(Some(-1)),
        Err(GameError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_earlier_snapshots_never_change() {
    let mut game = Game::new(0);
    game.make_move(1, 1, Player::X).unwrap();
    let snapshot = game.move_at(1).unwrap().board().clone();
    play(&mut game, &[(0, 0, Player::O), (2, 0, Player::X)]);

    let first = game.move_at(1).unwrap().board();
    assert_eq!(first, &snapshot);
    assert_eq!(first.available_count(), 8);
    assert!(first.is_available(0, 0));
}

#[test]
fn test_computer_plays_out_a_game() {
    let mut game = Game::with_board_length(0, 4).unwrap();
    let mut player = Player::X;
    while !game.outcome().is_terminal() {
        game.make_computer_move(player).unwrap();
        player = player.opponent();
    }
    assert!(game.moves().len() <= 17);
    if game.outcome() == Outcome::Draw {
        assert_eq!(game.current().board().available_count(), 0);
    }
}

#[test]
fn test_parsed_player_drives_moves() {
    let mut game = Game::new(0);
    let player: Player = "x".parse().unwrap();
    game.make_move(0, 0, player).unwrap();
    assert!(matches!(
        "Y".parse::<Player>(),
        Err(GameError::InvalidValue(_))
    ));
}
