use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_memory::core::{Board, SymbolDeck};
use tui_memory::input::Cursor;
use tui_memory::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use tui_memory::types::{GameAction, Symbol, TilePos, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_hot_path_is_allocation_free_without_io() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut layout = Vec::with_capacity(16);
    for id in 0..8 {
        layout.push(Symbol::new(id));
        layout.push(Symbol::new(id));
    }
    let mut board = Board::new(4, SymbolDeck::from_layout(&layout)).unwrap();
    let mut cursor = Cursor::new(board.size());

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = board.snapshot();
    let mut out: Vec<u8> = Vec::with_capacity(16 * 1024);

    // (0,0) and (1,0) carry different symbols, so this pair never matches
    // and the board stays in a steady click/revert cycle.
    let first = board.cell_to_point(TilePos::new(0, 0));
    let wrong = board.cell_to_point(TilePos::new(1, 0));

    // Warm-up: allow any lazy init/resizes, and grow the encode buffer to
    // its full-frame worst case.
    board.snapshot_into(&mut snap);
    view.render_into_with_cursor(&snap, Some(cursor.pos()), viewport, &mut fb);
    encode_full_into(&fb, &mut out).unwrap();
    out.clear();
    encode_diff_into(&prev, &fb, &mut out).unwrap();
    std::mem::swap(&mut prev, &mut fb);

    let allocs = with_alloc_counting(|| {
        for round in 0..200usize {
            // Click protocol: reveal, mismatch, then drain the delay.
            let _ = board.handle_click(first);
            let _ = board.handle_click(wrong);
            while board.is_locked() {
                let _ = board.tick(TICK_MS);
            }

            let action = if round % 2 == 0 {
                GameAction::CursorRight
            } else {
                GameAction::CursorLeft
            };
            let _ = cursor.apply(action);

            // Snapshot + render + encode into preallocated buffers.
            board.snapshot_into(&mut snap);
            view.render_into_with_cursor(&snap, Some(cursor.pos()), viewport, &mut fb);
            out.clear();
            encode_diff_into(&prev, &fb, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut fb);
        }
    });

    assert!(allocs == 0);
}
