//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn resolution.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.state.grid.rows() as u64);
        hasher.write_u64(self.state.grid.cols() as u64);
        for (_, tile) in self.state.grid.cells() {
            hasher.write_u8(tile as u8);
        }
        hasher.write_i32(self.state.player.y);
        hasher.write_i32(self.state.player.x);
        hasher.write_u32(self.state.score);
        hasher.write_u8(match self.state.status {
            GameStatus::Active => 0,
            GameStatus::Won => 1,
            GameStatus::Lost => 2,
        });
        hasher.finish()
    }
}
