//! Session configuration and layout validation.
//! A `GameConfig` is plain data; `parse_layout` is the only place glyph rows
//! become a `Grid`, so every session (new or restored) starts from a checked
//! board.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::Grid;
use crate::types::{GameStatus, Pos, Tile};

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;
pub const DEFAULT_CAPTURE_TARGET: u32 = 7;

pub const DEFAULT_LAYOUT: [&str; DEFAULT_ROWS] = [
    "c..d....",
    ".T..To..",
    "..do..d.",
    "c...c...",
    "..o...T.",
    "Tc.T.o..",
    "...o....",
    "......@T",
];

/// What happens to a trap after it captures an enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrapPolicy {
    #[default]
    Consume,
    Persist,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("layout has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error("layout has no player tile")]
    MissingPlayer,
    #[error("layout has {0} player tiles, expected exactly one")]
    MultiplePlayers(usize),
    #[error("capture target must be at least 1")]
    ZeroCaptureTarget,
    #[error("saved session format {0} is not supported")]
    UnsupportedSessionVersion(u32),
    #[error("saved player position {0:?} does not match the board")]
    PlayerPositionMismatch(Pos),
    #[error("saved session is {status:?} with score {score} against target {target}")]
    StatusScoreMismatch { status: GameStatus, score: u32, target: u32 },
    #[error("saved session is {0:?} but still mid-turn")]
    PendingPhaseAfterEnd(GameStatus),
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub initial_layout: Vec<String>,
    pub capture_target: u32,
    pub trap_policy: TrapPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_layout: DEFAULT_LAYOUT.iter().map(|row| (*row).to_string()).collect(),
            capture_target: DEFAULT_CAPTURE_TARGET,
            trap_policy: TrapPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Config whose dimensions are taken from the layout itself.
    pub fn with_layout(layout: &[&str]) -> Self {
        Self {
            rows: layout.len(),
            cols: layout.first().map_or(0, |row| row.chars().count()),
            initial_layout: layout.iter().map(|row| (*row).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn capture_target(mut self, target: u32) -> Self {
        self.capture_target = target;
        self
    }

    pub fn trap_policy(mut self, policy: TrapPolicy) -> Self {
        self.trap_policy = policy;
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validates the layout and returns the grid with the player's cell.
    pub fn build_grid(&self) -> Result<(Grid, Pos), ConfigError> {
        if self.capture_target == 0 {
            return Err(ConfigError::ZeroCaptureTarget);
        }
        let (grid, players) = parse_layout(self.rows, self.cols, &self.initial_layout)?;
        match players.as_slice() {
            [] => Err(ConfigError::MissingPlayer),
            [player] => Ok((grid, *player)),
            many => Err(ConfigError::MultiplePlayers(many.len())),
        }
    }
}

/// Turns glyph rows into a grid plus every player cell found. The shape is
/// checked against `rows`/`cols` before any tile storage is allocated.
pub(crate) fn parse_layout(
    rows: usize,
    cols: usize,
    layout: &[String],
) -> Result<(Grid, Vec<Pos>), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    if layout.len() != rows {
        return Err(ConfigError::RowCountMismatch { expected: rows, found: layout.len() });
    }
    for (row, line) in layout.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(ConfigError::RaggedRow { row, expected: cols, found });
        }
    }

    let mut tiles = Vec::new();
    let mut players = Vec::new();
    for (row, line) in layout.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let tile =
                Tile::from_glyph(glyph).ok_or(ConfigError::UnknownGlyph { row, col, glyph })?;
            if tile == Tile::Player {
                players.push(Pos { y: row as i32, x: col as i32 });
            }
            tiles.push(tile);
        }
    }
    Ok((Grid::from_tiles(cols, tiles), players))
}
