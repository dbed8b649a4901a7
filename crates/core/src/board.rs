//! Board module - grid ownership and the two-pick matching protocol
//!
//! The board owns every tile and is the only mutator of tile state. A click
//! is mapped to a cell, the cell's tile asked to reveal, and the position
//! queued. The queue never holds more than two picks: a second pick resolves
//! immediately, either confirming both tiles as matched or scheduling both
//! for a flip-back once the mismatch delay has run down on the frame clock.
//! While a flip-back is pending the board reports itself locked and ignores
//! further clicks, so the queue is never observable at length 2 from outside.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::deck::SymbolDeck;
use crate::snapshot::{BoardSnapshot, TileFace};
use crate::tile::Tile;
use crate::types::{Point, TilePos, MISMATCH_DELAY_MS, TILE_H, TILE_W};

/// Construction-time failures. Recoverable by retrying with a valid
/// size/deck pair; never surfaced mid-game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions do not admit a perfect pairing.
    #[error("board size {0} does not admit a perfect pairing")]
    InvalidBoardSize(u8),
    /// The deck did not supply each drawn symbol exactly twice.
    #[error("deck does not supply each symbol exactly twice")]
    UnpairedDeck,
}

/// What a `handle_click` call did, for callers that render or test.
///
/// Invalid clicks (outside the grid, on a face-up tile, while the board is
/// locked, after the game ended) are not errors; they report `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click had no effect.
    Ignored,
    /// First pick of a turn flipped face-up.
    Revealed(TilePos),
    /// Second pick completed a pair; both tiles are now permanent.
    Matched(TilePos, TilePos),
    /// Second pick mismatched; both tiles flip back after the delay.
    Mismatched(TilePos, TilePos),
}

/// The playing field: a square grid of tiles plus the matching state.
#[derive(Debug, Clone)]
pub struct Board {
    size: u8,
    /// Row-major grid, `size * size` tiles.
    tiles: Vec<Tile>,
    /// Face-up picks awaiting comparison.
    pending: ArrayVec<TilePos, 2>,
    /// Mismatched pair waiting for its flip-back.
    reverting: Option<(TilePos, TilePos)>,
    revert_timer_ms: u32,
    /// Count of tiles in the matched state. Updated only at confirm time.
    matched: u16,
    elapsed_ms: u64,
    /// Per-cell extents of the board's display space.
    cell_w: u16,
    cell_h: u16,
}

impl Board {
    /// Build a `size` x `size` board from `deck` using the standard tile
    /// extents.
    pub fn new(size: u8, deck: SymbolDeck) -> Result<Self, BoardError> {
        Self::with_extents(size, deck, TILE_W, TILE_H)
    }

    /// Build a board with custom per-cell extents for its display space.
    ///
    /// Draws one card per cell in row-major order. Fails when the grid
    /// cannot be evenly paired or the deck does not cover it two-per-symbol.
    /// Extents must be non-zero.
    pub fn with_extents(
        size: u8,
        mut deck: SymbolDeck,
        cell_w: u16,
        cell_h: u16,
    ) -> Result<Self, BoardError> {
        debug_assert!(cell_w > 0 && cell_h > 0, "zero cell extent");

        if size == 0 || size % 2 != 0 {
            return Err(BoardError::InvalidBoardSize(size));
        }

        let cells = size as usize * size as usize;
        let mut tiles = Vec::with_capacity(cells);
        let mut counts = [0u16; 256];

        for _ in 0..cells {
            let Some(symbol) = deck.draw() else {
                return Err(BoardError::UnpairedDeck);
            };
            counts[symbol.id() as usize] += 1;
            tiles.push(Tile::new(symbol));
        }

        if counts.iter().any(|&count| count != 0 && count != 2) {
            return Err(BoardError::UnpairedDeck);
        }

        Ok(Self {
            size,
            tiles,
            pending: ArrayVec::new(),
            reverting: None,
            revert_timer_ms: 0,
            matched: 0,
            elapsed_ms: 0,
            cell_w,
            cell_h,
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Look up a tile. `None` for positions off the grid.
    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    /// Number of picks face-up awaiting comparison. Always 0 or 1 between
    /// calls; a second pick resolves before `handle_click` returns.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True while a mismatched pair is waiting out the flip-back delay.
    /// Clicks are ignored until the delay runs down.
    pub fn is_locked(&self) -> bool {
        self.reverting.is_some()
    }

    /// True once every tile is matched. Terminal: clicks are ignored and the
    /// score clock stops.
    pub fn is_game_over(&self) -> bool {
        let done = self.matched as usize == self.tiles.len();
        debug_assert_eq!(
            done,
            self.tiles.iter().all(Tile::is_matched),
            "matched counter out of sync with tile states"
        );
        done
    }

    /// Elapsed play time in whole seconds. Lower is better.
    pub fn score_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    /// Map a point in the board's display space to a cell.
    ///
    /// Returns `None` for points outside the grid (score margins, panel
    /// area); arbitrary coordinates are expected input, not an error.
    pub fn point_to_cell(&self, point: Point) -> Option<TilePos> {
        let col = point.x / self.cell_w;
        let row = point.y / self.cell_h;
        if row >= self.size as u16 || col >= self.size as u16 {
            return None;
        }
        Some(TilePos::new(row as u8, col as u8))
    }

    /// Center of a cell in the board's display space. Inverse of
    /// [`point_to_cell`](Self::point_to_cell) for every on-grid cell; used
    /// to synthesize clicks from keyboard input.
    pub fn cell_to_point(&self, pos: TilePos) -> Point {
        Point::new(
            pos.col as u16 * self.cell_w + self.cell_w / 2,
            pos.row as u16 * self.cell_h + self.cell_h / 2,
        )
    }

    /// Apply one pointer click to the board.
    ///
    /// Ignores the click when the game is over, the board is locked, the
    /// point is off the grid, or the target tile is already face-up.
    /// Otherwise reveals the tile and, on the second pick of a turn,
    /// resolves the pair before returning.
    pub fn handle_click(&mut self, point: Point) -> ClickOutcome {
        if self.is_game_over() || self.is_locked() {
            return ClickOutcome::Ignored;
        }

        let Some(pos) = self.point_to_cell(point) else {
            return ClickOutcome::Ignored;
        };

        if self.pending.is_full() {
            return ClickOutcome::Ignored;
        }

        let idx = self.index(pos);
        if !self.tiles[idx].attempt_reveal() {
            return ClickOutcome::Ignored;
        }

        self.pending.push(pos);
        if self.pending.len() < 2 {
            return ClickOutcome::Revealed(pos);
        }

        self.resolve_pair()
    }

    /// Compare the two queued picks and clear the queue.
    fn resolve_pair(&mut self) -> ClickOutcome {
        let (first, second) = (self.pending[0], self.pending[1]);
        self.pending.clear();

        let first_idx = self.index(first);
        let second_idx = self.index(second);

        if self.tiles[first_idx].symbol() == self.tiles[second_idx].symbol() {
            self.tiles[first_idx].confirm_match();
            self.tiles[second_idx].confirm_match();
            self.matched += 2;
            ClickOutcome::Matched(first, second)
        } else {
            self.reverting = Some((first, second));
            self.revert_timer_ms = MISMATCH_DELAY_MS;
            ClickOutcome::Mismatched(first, second)
        }
    }

    /// Advance the board clock by one frame.
    ///
    /// Accumulates score time while the game is live and counts down any
    /// scheduled flip-back, firing it once the delay has elapsed. Returns
    /// true when tile state changed (a flip-back fired).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_game_over() {
            self.elapsed_ms += u64::from(elapsed_ms);
        }

        if self.reverting.is_some() {
            self.revert_timer_ms = self.revert_timer_ms.saturating_sub(elapsed_ms);
            if self.revert_timer_ms == 0 {
                if let Some((first, second)) = self.reverting.take() {
                    let first_idx = self.index(first);
                    let second_idx = self.index(second);
                    self.tiles[first_idx].revert();
                    self.tiles[second_idx].revert();
                    return true;
                }
            }
        }

        false
    }

    /// Fill `out` with the renderable view of the board, reusing its
    /// buffers.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.size = self.size;
        out.faces.clear();
        out.faces.extend(self.tiles.iter().map(|tile| {
            if tile.is_face_up() {
                TileFace::Up(tile.symbol())
            } else {
                TileFace::Down
            }
        }));
        out.matched_pairs = self.matched / 2;
        out.total_pairs = (self.tiles.len() / 2) as u16;
        out.score_secs = self.score_secs();
        out.locked = self.is_locked();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn index(&self, pos: TilePos) -> usize {
        pos.row as usize * self.size as usize + pos.col as usize
    }
}
