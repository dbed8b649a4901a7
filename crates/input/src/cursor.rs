//! Keyboard cursor over the board grid.
//!
//! The board's protocol is click-driven; the cursor gives keyboard players a
//! way in. Arrow keys move a highlighted cell, and a reveal synthesizes a
//! click at that cell through `Board::cell_to_point`.

use crate::types::{GameAction, TilePos};

/// Grid cursor, clamped to the board edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: TilePos,
    size: u8,
}

impl Cursor {
    /// Cursor at the top-left of a `size` x `size` board.
    pub fn new(size: u8) -> Self {
        Self {
            pos: TilePos::new(0, 0),
            size,
        }
    }

    pub fn pos(&self) -> TilePos {
        self.pos
    }

    /// Move the cursor for a movement action. Non-movement actions are
    /// ignored. Returns true if the cursor changed position.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let TilePos { row, col } = self.pos;
        let (new_row, new_col) = match action {
            GameAction::CursorUp => (row.saturating_sub(1), col),
            GameAction::CursorDown => ((row + 1).min(self.size - 1), col),
            GameAction::CursorLeft => (row, col.saturating_sub(1)),
            GameAction::CursorRight => (row, (col + 1).min(self.size - 1)),
            _ => (row, col),
        };

        let moved = (new_row, new_col) != (row, col);
        self.pos = TilePos::new(new_row, new_col);
        moved
    }
}
