//! JSON record of an in-progress session, so a game survives a restart.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, Pos};

pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Everything needed to put a `Game` back where it was. The board is kept as
/// glyph rows; enemy ids are not stored and are handed out again in
/// row-major order on restore.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    pub format_version: u32,
    pub grid: Vec<String>,
    pub player: Pos,
    pub score: u32,
    pub status: GameStatus,
    pub message: String,
    pub moving: bool,
    pub outcome_reported: bool,
}

impl SessionFile {
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
