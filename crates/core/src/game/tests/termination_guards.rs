//! Tests for win/loss evaluation and terminal-state guards.

use super::support::*;

#[test]
fn win_is_checked_after_the_whole_phase() {
    let config = GameConfig::with_layout(&["co...", "d....", "....@"]).capture_target(1);
    let mut game = game_with(config);

    let snapshot = game.move_player(Direction::Left);
    assert_eq!(snapshot.status, GameStatus::Won);
    assert_eq!(snapshot.message, MESSAGE_WIN);
    assert_eq!(rows_of(&game), vec![".....", ".d...", "...@."], "drone still moves after the win");
    assert_eq!(game.log().last(), Some(&LogEvent::GameWon { score: 1 }));
}

#[test]
fn capture_in_the_same_turn_beats_the_win() {
    let config = GameConfig::with_layout(&["co..", "....", ".d.@"]).capture_target(1);
    let mut game = game_with(config);

    let snapshot = game.move_player(Direction::Left);
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.status, GameStatus::Lost);
    assert_eq!(snapshot.message, MESSAGE_GAME_OVER);
    assert_eq!(game.summary(), Some(GameSummary { result: GameResult::Lose, score: 1 }));
}

#[test]
fn finished_game_ignores_moves() {
    let mut game = game_from(&[".c..", "....", ".@.."]);
    game.move_player(Direction::Up);
    assert_eq!(game.status(), GameStatus::Lost);

    let hash = game.snapshot_hash();
    let log_len = game.log().len();
    for direction in Direction::ALL {
        assert_eq!(game.play_turn(direction), MoveOutcome::Rejected(MoveRejection::GameOver));
    }
    assert_eq!(game.snapshot_hash(), hash);
    assert_eq!(game.log().len(), log_len);
    assert_eq!(game.message(), MESSAGE_GAME_OVER);
}

#[test]
fn reset_restores_the_initial_board() {
    let layout = [".c..", "....", ".@.."];
    let mut game = game_from(&layout);
    let initial_hash = game.snapshot_hash();
    game.move_player(Direction::Up);
    assert_eq!(game.status(), GameStatus::Lost);

    game.reset();
    assert_eq!(rows_of(&game), layout.to_vec());
    assert_eq!(game.score(), 0);
    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.message(), MESSAGE_READY);
    assert!(game.log().is_empty());
    assert_eq!(game.snapshot_hash(), initial_hash);
    assert!(game.play_turn(Direction::Right).is_accepted());
}

#[test]
fn reset_is_allowed_mid_game() {
    let mut game = game_with(GameConfig::default());
    game.move_player(Direction::Up);
    assert_eq!(game.score(), 1);

    game.reset();
    assert_eq!(game.snapshot(), game_with(GameConfig::default()).snapshot());
}
