//! Positions, tiles, turn outcomes and the public session records.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row and column displacement, rows growing downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Drone,
    Car,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Empty,
    Player,
    Drone,
    Car,
    Trap,
    Tree,
}

impl Tile {
    pub fn enemy_kind(self) -> Option<EnemyKind> {
        match self {
            Tile::Drone => Some(EnemyKind::Drone),
            Tile::Car => Some(EnemyKind::Car),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Player => '@',
            Tile::Drone => 'd',
            Tile::Car => 'c',
            Tile::Trap => 'o',
            Tile::Tree => 'T',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Tile::Empty),
            '@' => Some(Tile::Player),
            'd' => Some(Tile::Drone),
            'c' => Some(Tile::Car),
            'o' => Some(Tile::Trap),
            'T' => Some(Tile::Tree),
            _ => None,
        }
    }
}

impl From<EnemyKind> for Tile {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Drone => Tile::Drone,
            EnemyKind::Car => Tile::Car,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Finished-game result as the reporting side records it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Lose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,
    pub score: u32,
}

impl GameSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    TurnInProgress,
    OutOfBounds,
    Occupied(Tile),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted { from: Pos, to: Pos },
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerMoved { from: Pos, to: Pos },
    EnemyAdvanced { enemy: EnemyId, from: Pos, to: Pos },
    EnemyHeld { enemy: EnemyId, at: Pos },
    EnemyTrapped { enemy: EnemyId, from: Pos, trap: Pos },
    PlayerCaught { enemy: EnemyId, at: Pos },
    GameWon { score: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<Vec<Tile>>,
    pub score: u32,
    pub capture_target: u32,
    pub status: GameStatus,
    pub message: String,
    pub moving: bool,
}

pub const MESSAGE_READY: &str = "Ready for play";
pub const MESSAGE_MOVING: &str = "Moving elements...";
pub const MESSAGE_GAME_OVER: &str = "Game Over";
pub const MESSAGE_WIN: &str = "You win";
