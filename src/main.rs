//! Terminal Memory runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input (mouse and keyboard) and a custom
//! framebuffer-based renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::{Board, BoardSnapshot, SimpleRng, SymbolDeck};
use tui_memory::input::{handle_key_event, pointer_click, should_quit, Cursor};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, BOARD_SIZE, PAIR_COUNT, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut seed = initial_seed();
    let mut board = new_board(seed)?;
    let mut cursor = Cursor::new(BOARD_SIZE);

    let view = GameView::default();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        board.snapshot_into(&mut snap);
        view.render_into_with_cursor(&snap, Some(cursor.pos()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::Reveal => {
                                let point = board.cell_to_point(cursor.pos());
                                board.handle_click(point);
                            }
                            GameAction::NewGame => {
                                seed = SimpleRng::new(seed).next_u32();
                                board = new_board(seed)?;
                                cursor = Cursor::new(BOARD_SIZE);
                            }
                            _ => {
                                cursor.apply(action);
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((column, row)) = pointer_click(mouse) {
                        if let Some(point) = view.board_point(viewport, column, row) {
                            board.handle_click(point);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick. Advance `last_tick` by exactly the milliseconds consumed so
        // the score clock tracks wall time without drift.
        if last_tick.elapsed() >= tick_duration {
            let dt_ms = last_tick.elapsed().as_millis() as u32;
            last_tick += Duration::from_millis(dt_ms as u64);
            board.tick(dt_ms);
        }
    }
}

fn new_board(seed: u32) -> Result<Board> {
    let deck = SymbolDeck::shuffled(PAIR_COUNT, seed);
    Ok(Board::new(BOARD_SIZE, deck)?)
}

/// Seed for the first board. `TUI_MEMORY_SEED` pins the layout for
/// reproducible games; otherwise the wall clock decides.
fn initial_seed() -> u32 {
    if let Ok(value) = std::env::var("TUI_MEMORY_SEED") {
        if let Ok(seed) = value.parse() {
            return seed;
        }
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.subsec_nanos() ^ now.as_secs() as u32
}
