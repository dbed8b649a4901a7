//! Tile module - the per-cell reveal/match state machine
//!
//! Each tile owns a symbol (fixed at construction) and a three-state reveal
//! lifecycle. `Matched` is terminal: no transition leaves it. The board is the
//! only caller of the mutating transitions; it never calls `confirm_match` or
//! `revert` outside the two-pending resolution protocol, which is what makes
//! the debug assertions below unreachable in a correct build.

use crate::types::Symbol;

/// Reveal state of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Face-down, showing the placeholder glyph.
    Hidden,
    /// Face-up, awaiting comparison against a second pick.
    Revealed,
    /// Face-up permanently. Terminal.
    Matched,
}

/// One grid cell: an immutable symbol plus its reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    symbol: Symbol,
    state: TileState,
}

impl Tile {
    /// Create a face-down tile carrying `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: TileState::Hidden,
        }
    }

    /// The symbol this tile pairs on. Never changes after construction.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == TileState::Revealed
    }

    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }

    /// True for any face-up tile, whether still pending or already matched.
    pub fn is_face_up(&self) -> bool {
        self.state != TileState::Hidden
    }

    /// Try to flip the tile face-up.
    ///
    /// Returns false without changing state unless the tile is `Hidden`. This
    /// is the sole guard that keeps a tile from being queued twice in one
    /// pick or re-opened after it matched.
    pub fn attempt_reveal(&mut self) -> bool {
        match self.state {
            TileState::Hidden => {
                self.state = TileState::Revealed;
                true
            }
            TileState::Revealed | TileState::Matched => false,
        }
    }

    /// Commit a revealed tile as permanently matched.
    ///
    /// Valid only from `Revealed`; any other state is a protocol bug.
    pub fn confirm_match(&mut self) {
        debug_assert_eq!(
            self.state,
            TileState::Revealed,
            "confirm_match on a tile that is not revealed"
        );
        self.state = TileState::Matched;
    }

    /// Flip a revealed tile back face-down after a failed comparison.
    ///
    /// Valid only from `Revealed`; any other state is a protocol bug.
    pub fn revert(&mut self) {
        debug_assert_eq!(
            self.state,
            TileState::Revealed,
            "revert on a tile that is not revealed"
        );
        self.state = TileState::Hidden;
    }
}
