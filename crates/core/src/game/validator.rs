//! Player move validation and commit.

use super::*;

/// Target cell for a player step, or why the step has no effect. Only empty
/// cells accept the player.
pub fn validate_player_move(
    grid: &Grid,
    from: Pos,
    direction: Direction,
) -> Result<Pos, MoveRejection> {
    let to = from.step(direction);
    match grid.tile_at(to) {
        None => Err(MoveRejection::OutOfBounds),
        Some(Tile::Empty) => Ok(to),
        Some(tile) => Err(MoveRejection::Occupied(tile)),
    }
}

impl Game {
    /// Directions the player could step in right now. Empty when the game is
    /// over, a phase is pending, or the player is boxed in.
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.state.status.is_terminal() || self.moving {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|direction| {
                validate_player_move(&self.state.grid, self.state.player, *direction).is_ok()
            })
            .collect()
    }

    /// First half of a turn: moves the player and opens the enemy phase.
    pub fn commit_player_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.status.is_terminal() {
            return MoveOutcome::Rejected(MoveRejection::GameOver);
        }
        if self.moving {
            return MoveOutcome::Rejected(MoveRejection::TurnInProgress);
        }

        let from = self.state.player;
        let to = match validate_player_move(&self.state.grid, from, direction) {
            Ok(to) => to,
            Err(rejection) => return MoveOutcome::Rejected(rejection),
        };

        self.state.grid.set_tile(from, Tile::Empty);
        self.state.grid.set_tile(to, Tile::Player);
        self.state.player = to;
        self.log.push(LogEvent::PlayerMoved { from, to });

        self.moving = true;
        self.message = MESSAGE_MOVING.to_string();
        MoveOutcome::Accepted { from, to }
    }
}
