//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Board geometry
//!
//! The board is a `BOARD_SIZE` x `BOARD_SIZE` grid of tiles. Each tile covers
//! `TILE_W` x `TILE_H` display units; for the terminal build a display unit is
//! one character cell. The board's click mapping and the terminal view must
//! agree on these extents, which is why they live here rather than in either
//! crate.
//!
//! # Game timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame tick (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 500 | How long a mismatched pair stays visible |

/// Default board edge length. Must be even so the tiles pair up perfectly.
pub const BOARD_SIZE: u8 = 4;
/// Distinct symbols on the default board; each appears on exactly two tiles.
pub const PAIR_COUNT: u8 = (BOARD_SIZE * BOARD_SIZE) / 2;

/// Per-tile width in display units.
pub const TILE_W: u16 = 7;
/// Per-tile height in display units.
pub const TILE_H: u16 = 3;

/// Fixed frame tick (milliseconds).
pub const TICK_MS: u32 = 16;
/// How long a mismatched pair stays face-up before reverting (milliseconds).
pub const MISMATCH_DELAY_MS: u32 = 500;

/// Opaque identifier for a pairable symbol.
///
/// Exactly two tiles on a board carry the same `Symbol`. Matching compares
/// these values directly; nothing about a symbol's on-screen appearance
/// participates in game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

/// Grid coordinate of a tile, row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: u8,
    pub col: u8,
}

impl TilePos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A point in the board's display space.
///
/// (0, 0) is the board's top-left corner; x grows rightward, y downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Keyboard-driven game actions.
///
/// Pointer clicks are not actions; they carry coordinates and go straight to
/// the board. These cover everything else the player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Reveal the tile under the keyboard cursor.
    Reveal,
    /// Tear down the board and start over with a fresh shuffle.
    NewGame,
}
