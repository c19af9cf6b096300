//! Board storage, the enemy arena and whole-state invariant checks.

use std::fmt;

use slotmap::SlotMap;
use thiserror::Error;

use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Empty grid, or `None` when `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        Some(Self { rows, cols, tiles: vec![Tile::Empty; len] })
    }

    /// Row-major tiles; the row count follows from `cols`.
    pub(crate) fn from_tiles(cols: usize, tiles: Vec<Tile>) -> Self {
        let rows = if cols == 0 { 0 } else { tiles.len() / cols };
        Self { rows, cols, tiles }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    /// `None` outside the grid.
    pub fn tile_at(&self, pos: Pos) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.tiles[self.index(pos)])
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        debug_assert!(self.in_bounds(pos), "write outside the grid at {pos:?}");
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        let cols = self.cols;
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            let pos = Pos { y: (idx / cols) as i32, x: (idx % cols) as i32 };
            (pos, *tile)
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.tiles.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.cols + (pos.x as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            let line: String = row.iter().map(|tile| tile.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player at {0:?} is outside the grid")]
    PlayerOutOfBounds(Pos),
    #[error("enemy {id:?} at {pos:?} is outside the grid")]
    EnemyOutOfBounds { id: EnemyId, pos: Pos },
    #[error("enemy {id:?} expects {expected:?} at {pos:?} but the grid holds {found:?}")]
    EnemyTileMismatch { id: EnemyId, pos: Pos, expected: Tile, found: Tile },
    #[error("grid holds {grid} enemy tiles but {tracked} enemies are tracked")]
    EnemyCountMismatch { grid: usize, tracked: usize },
    #[error("active game has {0} player tiles")]
    PlayerCount(usize),
    #[error("player tile missing at tracked position {0:?}")]
    PlayerTileMismatch(Pos),
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub player: Pos,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Builds the actor view of a validated grid. Enemy ids are handed out in
    /// row-major order.
    pub fn from_grid(grid: Grid, player: Pos) -> Self {
        let mut enemies = SlotMap::with_key();
        for (pos, tile) in grid.cells() {
            if let Some(kind) = tile.enemy_kind() {
                let id = enemies.insert(Enemy { id: EnemyId::default(), kind, pos });
                enemies[id].id = id;
            }
        }
        Self { grid, enemies, player, score: 0, status: GameStatus::Active }
    }

    /// Enemy ids sorted by current position, row-major.
    pub fn enemies_in_scan_order(&self) -> Vec<EnemyId> {
        let mut order: Vec<(Pos, EnemyId)> =
            self.enemies.iter().map(|(id, enemy)| (enemy.pos, id)).collect();
        order.sort_by_key(|(pos, _)| *pos);
        order.into_iter().map(|(_, id)| id).collect()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.grid.in_bounds(self.player) {
            return Err(InvariantViolation::PlayerOutOfBounds(self.player));
        }

        for (id, enemy) in &self.enemies {
            let expected = Tile::from(enemy.kind);
            let Some(found) = self.grid.tile_at(enemy.pos) else {
                return Err(InvariantViolation::EnemyOutOfBounds { id, pos: enemy.pos });
            };
            if found != expected {
                return Err(InvariantViolation::EnemyTileMismatch {
                    id,
                    pos: enemy.pos,
                    expected,
                    found,
                });
            }
        }

        let grid_enemies = self.grid.count(Tile::Drone) + self.grid.count(Tile::Car);
        if grid_enemies != self.enemies.len() {
            return Err(InvariantViolation::EnemyCountMismatch {
                grid: grid_enemies,
                tracked: self.enemies.len(),
            });
        }

        if self.status == GameStatus::Active {
            let players = self.grid.count(Tile::Player);
            if players != 1 {
                return Err(InvariantViolation::PlayerCount(players));
            }
            if self.grid.tile_at(self.player) != Some(Tile::Player) {
                return Err(InvariantViolation::PlayerTileMismatch(self.player));
            }
        }

        Ok(())
    }
}
