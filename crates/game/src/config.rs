use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::hand::Hand;

pub const BOARD_CELL_COUNT: usize = 10;
pub const CELL_SIZE: f32 = 48.0;
pub const HAND_CAPACITY: usize = 3;

/// Number of distinct piece colors in the palette.
pub const COLOR_COUNT: u8 = 9;

/// Largest side length of any piece shape, in cells.
pub const MAX_PIECE_SIDE: usize = 5;

pub const DEFAULT_SEED: u64 = 0x5EED_B10C;
pub const DEFAULT_SAVE_PATH: &str = "saves/game.bin";

/// Runtime game configuration. Defaults mirror the constants above; a JSON
/// document may override any subset of fields.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cell_count: usize,
    pub cell_size: f32,
    pub hand_capacity: usize,
    pub seed: u64,
    pub save_path: String,
    /// Compress save payloads with lz4.
    pub compress_saves: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_count: BOARD_CELL_COUNT,
            cell_size: CELL_SIZE,
            hand_capacity: HAND_CAPACITY,
            seed: DEFAULT_SEED,
            save_path: DEFAULT_SAVE_PATH.to_string(),
            compress_saves: true,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn build_board(&self) -> Board {
        Board::new(self.cell_count, self.cell_size)
    }

    pub fn build_hand(&self) -> Hand {
        Hand::new(self.hand_capacity)
    }
}
