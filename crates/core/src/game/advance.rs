//! Enemy advance phase: one greedy step per enemy toward the player.
//! Processing order is fixed by a row-major snapshot taken when the phase
//! starts; enemies are then followed by id, so cells vacated or filled earlier
//! in the same phase are seen by later enemies.

use log::debug;

use super::*;

enum StepResult {
    Advanced,
    Held,
    Trapped,
    Caught,
}

/// Cells an enemy at `from` tries, in order, to close in on `target`.
/// Horizontal comes first whenever the columns differ.
pub fn candidate_steps(from: Pos, target: Pos) -> Vec<Pos> {
    let dy = (target.y - from.y).signum();
    let dx = (target.x - from.x).signum();
    let horizontal = Pos { y: from.y, x: from.x + dx };
    let vertical = Pos { y: from.y + dy, x: from.x };
    let ordered = if dx != 0 { [horizontal, vertical] } else { [vertical, horizontal] };
    ordered.into_iter().filter(|step| *step != from).collect()
}

impl Game {
    pub(super) fn advance_enemies(&mut self) -> PhaseEnd {
        let target = self.state.player;
        let order = self.state.enemies_in_scan_order();
        debug!("enemy phase: {} enemies toward {:?}", order.len(), target);

        for id in order {
            let Some(enemy) = self.state.enemies.get(id).cloned() else {
                continue;
            };
            // The player can only enter empty cells, so no enemy starts its
            // step on the player.
            debug_assert_ne!(enemy.pos, target, "enemy {id:?} already on the player's cell");

            if let StepResult::Caught = self.step_enemy(&enemy, target) {
                return PhaseEnd::PlayerCaught { enemy: id };
            }
        }
        PhaseEnd::Completed
    }

    fn step_enemy(&mut self, enemy: &Enemy, target: Pos) -> StepResult {
        for step in candidate_steps(enemy.pos, target) {
            let Some(tile) = self.state.grid.tile_at(step) else {
                continue;
            };
            match tile {
                Tile::Empty => {
                    self.relocate_enemy(enemy, step);
                    self.log.push(LogEvent::EnemyAdvanced {
                        enemy: enemy.id,
                        from: enemy.pos,
                        to: step,
                    });
                    return StepResult::Advanced;
                }
                Tile::Player => {
                    self.relocate_enemy(enemy, step);
                    self.log.push(LogEvent::PlayerCaught { enemy: enemy.id, at: step });
                    return StepResult::Caught;
                }
                Tile::Trap => {
                    self.trap_enemy(enemy, step);
                    return StepResult::Trapped;
                }
                Tile::Tree | Tile::Drone | Tile::Car => {}
            }
        }

        debug!("{:?} {:?} held at {:?}", enemy.kind, enemy.id, enemy.pos);
        self.log.push(LogEvent::EnemyHeld { enemy: enemy.id, at: enemy.pos });
        StepResult::Held
    }

    fn relocate_enemy(&mut self, enemy: &Enemy, to: Pos) {
        debug!("{:?} {:?} {:?} -> {:?}", enemy.kind, enemy.id, enemy.pos, to);
        self.state.grid.set_tile(enemy.pos, Tile::Empty);
        self.state.grid.set_tile(to, Tile::from(enemy.kind));
        self.state.enemies[enemy.id].pos = to;
    }

    fn trap_enemy(&mut self, enemy: &Enemy, trap: Pos) {
        self.state.grid.set_tile(enemy.pos, Tile::Empty);
        self.state.enemies.remove(enemy.id);
        if self.config.trap_policy == TrapPolicy::Consume {
            self.state.grid.set_tile(trap, Tile::Empty);
        }
        self.state.score += 1;
        debug!(
            "{:?} {:?} caught by trap at {:?}, score {}",
            enemy.kind, enemy.id, trap, self.state.score
        );
        self.log.push(LogEvent::EnemyTrapped { enemy: enemy.id, from: enemy.pos, trap });
    }
}
