use log::info;

use crate::config::{ConfigError, GameConfig, TrapPolicy, parse_layout};
use crate::report::OutcomeReporter;
use crate::session_file::{SESSION_FORMAT_VERSION, SessionFile};
use crate::state::{Enemy, GameState, Grid};
use crate::types::*;

mod advance;
mod hash;
mod outcome;
mod resume;
mod termination;
mod validator;

#[cfg(test)]
mod test_support;

pub use advance::candidate_steps;
pub use termination::{PhaseEnd, evaluate_termination};
pub use validator::validate_player_move;

/// A single play session: the board, score, status and the turn guard.
pub struct Game {
    config: GameConfig,
    initial: GameState,
    state: GameState,
    message: String,
    // Set between a committed player move and the end of the enemy phase.
    moving: bool,
    log: Vec<LogEvent>,
    reporter: Option<Box<dyn OutcomeReporter>>,
    summary_emitted: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let (grid, player) = config.build_grid()?;
        let initial = GameState::from_grid(grid, player);
        info!(
            "session created: {}x{} grid, {} enemies, capture target {}",
            config.rows,
            config.cols,
            initial.enemies.len(),
            config.capture_target
        );
        Ok(Self {
            config,
            state: initial.clone(),
            initial,
            message: MESSAGE_READY.to_string(),
            moving: false,
            log: Vec::new(),
            reporter: None,
            summary_emitted: false,
        })
    }

    pub fn with_reporter(
        config: GameConfig,
        reporter: impl OutcomeReporter + 'static,
    ) -> Result<Self, ConfigError> {
        let mut game = Self::new(config)?;
        game.set_reporter(reporter);
        Ok(game)
    }

    /// Replaces the outcome reporter, e.g. after restoring a saved session.
    pub fn set_reporter(&mut self, reporter: impl OutcomeReporter + 'static) {
        self.reporter = Some(Box::new(reporter));
    }

    /// Plays one full turn and returns the resulting public state.
    pub fn move_player(&mut self, direction: Direction) -> GameSnapshot {
        self.play_turn(direction);
        self.snapshot()
    }

    pub fn play_turn(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.commit_player_move(direction);
        if outcome.is_accepted() {
            self.resolve_enemy_phase();
        }
        outcome
    }

    /// Second half of a turn. Does nothing unless a player move has been
    /// committed and its enemy phase has not run yet.
    pub fn resolve_enemy_phase(&mut self) -> Option<PhaseEnd> {
        if !self.moving {
            return None;
        }
        let phase = self.advance_enemies();
        self.apply_termination(phase);
        self.moving = false;
        if self.state.status.is_terminal() {
            self.report_outcome();
        }
        Some(phase)
    }

    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.message = MESSAGE_READY.to_string();
        self.moving = false;
        self.log.clear();
        self.summary_emitted = false;
        info!("session reset");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.state.grid.rows(),
            cols: self.state.grid.cols(),
            grid: self.state.grid.to_rows(),
            score: self.state.score,
            capture_target: self.config.capture_target,
            status: self.state.status,
            message: self.message.clone(),
            moving: self.moving,
        }
    }

    /// Result record for a finished game, `None` while still active.
    pub fn summary(&self) -> Option<GameSummary> {
        let result = match self.state.status {
            GameStatus::Active => return None,
            GameStatus::Won => GameResult::Win,
            GameStatus::Lost => GameResult::Lose,
        };
        Some(GameSummary { result, score: self.state.score })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }
}
