//! Saving a live session and rebuilding one from a saved record.

use log::info;

use super::*;

impl Game {
    pub fn save_state(&self) -> SessionFile {
        SessionFile {
            format_version: SESSION_FORMAT_VERSION,
            grid: self.state.grid.to_string().lines().map(str::to_string).collect(),
            player: self.state.player,
            score: self.state.score,
            status: self.state.status,
            message: self.message.clone(),
            moving: self.moving,
            outcome_reported: self.summary_emitted,
        }
    }

    /// Restores a saved session on top of `config`. The saved board must have
    /// the configured dimensions and pass the same glyph checks as a fresh
    /// layout; `reset` still returns to the configured layout.
    pub fn from_saved(config: GameConfig, saved: SessionFile) -> Result<Self, ConfigError> {
        if saved.format_version != SESSION_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedSessionVersion(saved.format_version));
        }
        let (grid, players) = parse_layout(config.rows, config.cols, &saved.grid)?;
        check_saved_player(&grid, &players, saved.player, saved.status)?;
        check_saved_status(&saved, config.capture_target)?;

        let mut game = Self::new(config)?;
        let mut state = GameState::from_grid(grid, saved.player);
        state.score = saved.score;
        state.status = saved.status;
        info!(
            "session restored: {} enemies, score {}, {:?}",
            state.enemies.len(),
            state.score,
            state.status
        );

        game.state = state;
        game.message = saved.message;
        game.moving = saved.moving;
        game.summary_emitted = saved.outcome_reported;
        Ok(game)
    }
}

// A lost board may have had its player tile overwritten by the catching enemy.
fn check_saved_player(
    grid: &Grid,
    players: &[Pos],
    player: Pos,
    status: GameStatus,
) -> Result<(), ConfigError> {
    match players {
        [] if status == GameStatus::Lost => {
            if grid.tile_at(player).and_then(Tile::enemy_kind).is_some() {
                Ok(())
            } else {
                Err(ConfigError::PlayerPositionMismatch(player))
            }
        }
        [] => Err(ConfigError::MissingPlayer),
        [found] if *found == player => Ok(()),
        [_] => Err(ConfigError::PlayerPositionMismatch(player)),
        many => Err(ConfigError::MultiplePlayers(many.len())),
    }
}

fn check_saved_status(saved: &SessionFile, target: u32) -> Result<(), ConfigError> {
    let consistent = match saved.status {
        GameStatus::Active => saved.score < target,
        GameStatus::Won => saved.score >= target,
        GameStatus::Lost => true,
    };
    if !consistent {
        return Err(ConfigError::StatusScoreMismatch {
            status: saved.status,
            score: saved.score,
            target,
        });
    }
    if saved.moving && saved.status.is_terminal() {
        return Err(ConfigError::PendingPhaseAfterEnd(saved.status));
    }
    Ok(())
}
