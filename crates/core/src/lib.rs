//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tile state machine, the board's matching
//! protocol, and the scoring clock. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical board layouts
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`tile`]: Per-cell reveal/match state machine (`Hidden`/`Revealed`/`Matched`)
//! - [`deck`]: Shuffled symbol-pair deck drawn at board construction
//! - [`board`]: Grid ownership, click-to-cell mapping, and the two-pick
//!   matching protocol with its deferred mismatch flip-back
//! - [`snapshot`]: Flat renderable copy of board state
//!
//! # Game Rules
//!
//! - The board is a square grid of face-down tiles hiding paired symbols
//! - A turn reveals two tiles: equal symbols lock in permanently, unequal
//!   symbols flip back after a 500ms delay
//! - The board ignores clicks while a flip-back is pending
//! - The game ends when every tile is matched; the score is elapsed play
//!   time in whole seconds, lower is better
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, SymbolDeck};
//! use tui_memory_types::{Point, BOARD_SIZE, PAIR_COUNT};
//!
//! let deck = SymbolDeck::shuffled(PAIR_COUNT, 12345);
//! let mut board = Board::new(BOARD_SIZE, deck).unwrap();
//!
//! // Pick the top-left tile
//! board.handle_click(Point::new(0, 0));
//! assert_eq!(board.pending_count(), 1);
//!
//! // Drive the clock; the score counts whole seconds
//! board.tick(1000);
//! assert_eq!(board.score_secs(), 1);
//! ```
//!
//! # Timing
//!
//! The board is driven by a fixed external timestep:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Mismatch Delay**: 500ms before a failed pair flips back
//!
//! Call [`Board::tick`](board::Board::tick) every frame with elapsed time.

pub mod board;
pub mod deck;
pub mod snapshot;
pub mod tile;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, ClickOutcome};
pub use deck::{SimpleRng, SymbolDeck};
pub use snapshot::{BoardSnapshot, TileFace};
pub use tile::{Tile, TileState};
