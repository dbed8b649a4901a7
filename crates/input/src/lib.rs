//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], filters mouse
//! events down to click positions, and provides the keyboard cursor that
//! lets terminals without mouse support play the board.

pub mod cursor;
pub mod map;
pub mod pointer;

pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
pub use pointer::pointer_click;
