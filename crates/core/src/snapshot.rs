use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, Letter, BOARD_SIZE};

/// Plain-data copy of a game, for renderers and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Letter ranks, row-major, 0 for empty
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub status: GameStatus,
    pub won: bool,
    pub move_count: u32,
    pub episode_id: u32,
    /// Highest rank on the board, 0 when empty
    pub max_rank: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.best_score = 0;
        self.status = GameStatus::Playing;
        self.won = false;
        self.move_count = 0;
        self.episode_id = 0;
        self.max_rank = 0;
    }

    pub fn playable(&self) -> bool {
        self.status != GameStatus::Lost
    }

    /// Board rows rendered as letters, `.` for empty
    pub fn board_text(&self) -> [String; BOARD_SIZE] {
        self.board.map(|row| {
            row.iter()
                .map(|&rank| Letter::new(rank).map_or('.', Letter::as_char))
                .collect()
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            won: false,
            move_count: 0,
            episode_id: 0,
            max_rank: 0,
        }
    }
}
