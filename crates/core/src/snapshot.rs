//! Snapshot module - flat renderable copy of board state
//!
//! The renderer never touches the board directly; each frame the board is
//! copied into a [`BoardSnapshot`] and the view draws from that. Snapshots
//! reuse their buffers across frames via `Board::snapshot_into`.

use crate::types::{Symbol, BOARD_SIZE};

/// What the renderer may draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFace {
    /// Face-down placeholder.
    Down,
    /// Face-up, showing the tile's symbol. Pending and matched tiles render
    /// the same.
    Up(Symbol),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub size: u8,
    /// Row-major faces, `size * size` entries.
    pub faces: Vec<TileFace>,
    pub matched_pairs: u16,
    pub total_pairs: u16,
    pub score_secs: u64,
    pub locked: bool,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn face(&self, row: u8, col: u8) -> TileFace {
        self.faces[row as usize * self.size as usize + col as usize]
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        let cells = BOARD_SIZE as usize * BOARD_SIZE as usize;
        Self {
            size: BOARD_SIZE,
            faces: vec![TileFace::Down; cells],
            matched_pairs: 0,
            total_pairs: (cells / 2) as u16,
            score_secs: 0,
            locked: false,
            game_over: false,
        }
    }
}
