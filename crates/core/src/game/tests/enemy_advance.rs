//! Tests for the greedy enemy step and its collision rules.

use super::support::*;

#[test]
fn enemy_prefers_the_horizontal_step() {
    let mut game = game_from(&["c....", ".....", "....@"]);
    game.play_turn(Direction::Left);
    assert_eq!(rows_of(&game), vec![".c...", ".....", "...@."]);
}

#[test]
fn blocked_horizontal_step_falls_back_to_vertical() {
    let mut game = game_from(&["cT...", ".....", "....@"]);
    game.play_turn(Direction::Left);
    assert_eq!(rows_of(&game), vec![".T...", "c....", "...@."]);
}

#[test]
fn enemy_boxed_in_holds_position() {
    let mut game = game_from(&["cT.", "T..", "..@"]);
    let enemy = enemy_at(&game, Pos { y: 0, x: 0 }).unwrap();

    game.play_turn(Direction::Up);
    assert_eq!(rows_of(&game), vec!["cT.", "T.@", "..."]);
    assert!(game.log().contains(&LogEvent::EnemyHeld { enemy, at: Pos { y: 0, x: 0 } }));
}

#[test]
fn earlier_enemy_blocks_later_one_by_scan_order() {
    // The left car goes first and finds its neighbour still in place.
    let mut game = game_from(&["cc...", ".....", "....@"]);
    game.play_turn(Direction::Left);
    assert_eq!(rows_of(&game), vec!["..c..", "c....", "...@."]);
}

#[test]
fn cell_vacated_earlier_in_the_phase_is_free_for_later_enemies() {
    let mut game = game_from(&["@.cd", "...."]);
    game.play_turn(Direction::Down);
    assert_eq!(rows_of(&game), vec![".cd.", "@..."]);
}

#[test]
fn enemies_keep_their_ids_while_moving() {
    let mut game = game_from(&["@.cd", "...."]);
    let car = enemy_at(&game, Pos { y: 0, x: 2 }).unwrap();
    let drone = enemy_at(&game, Pos { y: 0, x: 3 }).unwrap();

    game.play_turn(Direction::Down);
    assert_eq!(game.state().enemies[car].pos, Pos { y: 0, x: 1 });
    assert_eq!(game.state().enemies[drone].pos, Pos { y: 0, x: 2 });
    assert_eq!(game.state().enemies[drone].kind, EnemyKind::Drone);
}

#[test]
fn trap_consumes_enemy_and_scores() {
    let mut game = game_from(&["co..", "...@"]);
    let enemy = enemy_at(&game, Pos { y: 0, x: 0 }).unwrap();

    game.play_turn(Direction::Left);
    assert_eq!(rows_of(&game), vec!["....", "..@."]);
    assert_eq!(game.score(), 1);
    assert!(game.state().enemies.is_empty());
    assert!(game.log().contains(&LogEvent::EnemyTrapped {
        enemy,
        from: Pos { y: 0, x: 0 },
        trap: Pos { y: 0, x: 1 },
    }));
    assert_eq!(game.status(), GameStatus::Active);
}

#[test]
fn persistent_trap_stays_on_the_board() {
    let config = GameConfig::with_layout(&["co..", "...@"]).trap_policy(TrapPolicy::Persist);
    let mut game = game_with(config);

    game.play_turn(Direction::Left);
    assert_eq!(rows_of(&game), vec![".o..", "..@."]);
    assert_eq!(game.score(), 1);
}

#[test]
fn reaching_the_player_loses_and_stops_the_phase() {
    let mut game = game_from(&[".c..d", ".....", ".@..."]);
    let car = enemy_at(&game, Pos { y: 0, x: 1 }).unwrap();

    let snapshot = game.move_player(Direction::Up);
    assert_eq!(rows_of(&game), vec!["....d", ".c...", "....."]);
    assert_eq!(snapshot.status, GameStatus::Lost);
    assert_eq!(snapshot.message, MESSAGE_GAME_OVER);
    assert!(game.log().contains(&LogEvent::PlayerCaught { enemy: car, at: Pos { y: 1, x: 1 } }));
    assert_eq!(game.log().len(), 2, "drone after the capture must not act");
    assert_eq!(game.state().check_invariants(), Ok(()));
}

#[test]
fn default_layout_first_move_up() {
    let mut game = game_with(GameConfig::default());
    let snapshot = game.move_player(Direction::Up);

    assert_eq!(
        rows_of(&game),
        vec![
            ".c..d...", ".T..To..", "........", ".c...cd.", "..o...T.", "T.cT.o..", "...o..@.",
            ".......T",
        ]
    );
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.status, GameStatus::Active);
    assert_eq!(snapshot.message, MESSAGE_READY);
    assert_eq!(game.state().enemies.len(), 6);
}
