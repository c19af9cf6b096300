//! End-of-turn win/loss evaluation.

use log::info;

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEnd {
    Completed,
    /// The phase stopped early; enemies after this one did not move.
    PlayerCaught { enemy: EnemyId },
}

/// Status and message after an enemy phase. A capture of the player wins over
/// reaching the capture target in the same turn.
pub fn evaluate_termination(
    phase: PhaseEnd,
    score: u32,
    capture_target: u32,
) -> (GameStatus, &'static str) {
    match phase {
        PhaseEnd::PlayerCaught { .. } => (GameStatus::Lost, MESSAGE_GAME_OVER),
        PhaseEnd::Completed if score >= capture_target => (GameStatus::Won, MESSAGE_WIN),
        PhaseEnd::Completed => (GameStatus::Active, MESSAGE_READY),
    }
}

impl Game {
    pub(super) fn apply_termination(&mut self, phase: PhaseEnd) {
        let (status, message) =
            evaluate_termination(phase, self.state.score, self.config.capture_target);
        match status {
            GameStatus::Lost => {
                info!("player caught at {:?}, score {}", self.state.player, self.state.score);
            }
            GameStatus::Won => {
                info!("capture target reached with score {}", self.state.score);
                self.log.push(LogEvent::GameWon { score: self.state.score });
            }
            GameStatus::Active => {}
        }
        self.state.status = status;
        self.message = message.to_string();
    }
}
