//! Shared fixtures for the `game` test suites.

use super::*;

pub(super) fn game_from(layout: &[&str]) -> Game {
    game_with(GameConfig::with_layout(layout))
}

pub(super) fn game_with(config: GameConfig) -> Game {
    Game::new(config).expect("fixture layout should be valid")
}

/// Current grid as layout strings, for comparing against expected boards.
pub(super) fn rows_of(game: &Game) -> Vec<String> {
    game.grid().to_string().lines().map(str::to_string).collect()
}

pub(super) fn enemy_at(game: &Game, pos: Pos) -> Option<EnemyId> {
    game.state().enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
}
