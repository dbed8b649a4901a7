use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Board, SymbolDeck};
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::{Symbol, TilePos, MISMATCH_DELAY_MS};

/// 4x4 layout with every pair adjacent in its row.
fn paired_layout() -> Vec<Symbol> {
    let mut layout = Vec::with_capacity(16);
    for id in 0..8 {
        layout.push(Symbol::new(id));
        layout.push(Symbol::new(id));
    }
    layout
}

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::new(4, SymbolDeck::from_layout(&paired_layout())).unwrap();

    c.bench_function("board_tick_16ms", |b| {
        b.iter(|| {
            board.tick(black_box(16));
        })
    });
}

fn bench_click_mismatch_cycle(c: &mut Criterion) {
    let mut board = Board::new(4, SymbolDeck::from_layout(&paired_layout())).unwrap();
    let first = board.cell_to_point(TilePos::new(0, 0));
    let wrong = board.cell_to_point(TilePos::new(1, 0));

    c.bench_function("click_mismatch_cycle", |b| {
        b.iter(|| {
            board.handle_click(black_box(first));
            board.handle_click(black_box(wrong));
            board.tick(MISMATCH_DELAY_MS);
        })
    });
}

fn bench_deal_and_match_pair(c: &mut Criterion) {
    let layout = paired_layout();
    let template = Board::new(4, SymbolDeck::from_layout(&layout)).unwrap();
    let first = template.cell_to_point(TilePos::new(0, 0));
    let second = template.cell_to_point(TilePos::new(0, 1));

    c.bench_function("deal_and_match_pair", |b| {
        b.iter(|| {
            let mut board = Board::new(4, SymbolDeck::from_layout(&layout)).unwrap();
            board.handle_click(first);
            board.handle_click(second);
            black_box(board.is_game_over());
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let board = Board::new(4, SymbolDeck::from_layout(&paired_layout())).unwrap();
    let mut snap = board.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            board.snapshot_into(&mut snap);
            black_box(snap.matched_pairs);
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let board = Board::new(4, SymbolDeck::from_layout(&paired_layout())).unwrap();
    let snap = board.snapshot();

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_click_mismatch_cycle,
    bench_deal_and_match_pair,
    bench_snapshot_into,
    bench_render_into
);
criterion_main!(benches);
