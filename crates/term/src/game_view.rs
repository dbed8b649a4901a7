//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the tile grid is drawn inside a box-drawn frame, each tile as a
//! `TILE_W` x `TILE_H` card with its own border and a centered glyph.
//! Face-down tiles show `?`; face-up tiles show their symbol's letter in the
//! symbol's color. A side panel carries the running time and matched-pair
//! count, and a `YOU WIN` overlay lands on the frame once the board is done.

use crate::core::snapshot::{BoardSnapshot, TileFace};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, Symbol, TilePos, BOARD_SIZE, TILE_H, TILE_W};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Grid edge length in tiles.
    size: u8,
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            cell_w: TILE_W,
            cell_h: TILE_H,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(size: u8, cell_w: u16, cell_h: u16) -> Self {
        Self {
            size,
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Translate a terminal cell under the pointer into the board's display
    /// space. `None` when the pointer is outside the tile grid.
    ///
    /// The grid's interior shares its coordinate system with
    /// `Board::point_to_cell`, so the result feeds `handle_click` directly.
    pub fn board_point(&self, viewport: Viewport, column: u16, row: u16) -> Option<Point> {
        let (origin_x, origin_y) = self.grid_origin(viewport);
        if column < origin_x || row < origin_y {
            return None;
        }

        let x = column - origin_x;
        let y = row - origin_y;
        if x >= self.grid_w() || y >= self.grid_h() {
            return None;
        }
        Some(Point::new(x, y))
    }

    /// Render the board into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    /// Render the board with the keyboard cursor highlighted.
    pub fn render_into_with_cursor(
        &self,
        snap: &BoardSnapshot,
        cursor: Option<TilePos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        debug_assert_eq!(snap.size, self.size, "snapshot size mismatch");

        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = self.grid_w() + 2;
        let frame_h = self.grid_h() + 2;
        let (start_x, start_y) = self.frame_origin(viewport);

        let frame = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        draw_box(fb, start_x, start_y, frame_w, frame_h, frame);

        for row in 0..self.size {
            for col in 0..self.size {
                let is_cursor = cursor == Some(TilePos::new(row, col));
                self.draw_tile(fb, viewport, row, col, snap.face(row, col), is_cursor);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn grid_w(&self) -> u16 {
        self.size as u16 * self.cell_w
    }

    fn grid_h(&self) -> u16 {
        self.size as u16 * self.cell_h
    }

    /// Top-left of the outer frame.
    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(self.grid_w() + 2) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(self.grid_h() + 2) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Top-left of the tile grid (inside the frame).
    fn grid_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (x, y) = self.frame_origin(viewport);
        (x + 1, y + 1)
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        row: u8,
        col: u8,
        face: TileFace,
        is_cursor: bool,
    ) {
        let (origin_x, origin_y) = self.grid_origin(viewport);
        let px = origin_x + col as u16 * self.cell_w;
        let py = origin_y + row as u16 * self.cell_h;

        let interior = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', interior);

        let edge = if is_cursor {
            CellStyle {
                fg: Rgb::new(240, 220, 80),
                bg: Rgb::new(30, 30, 40),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: Rgb::new(90, 90, 100),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: true,
            }
        };
        draw_box(fb, px, py, self.cell_w, self.cell_h, edge);

        let glyph_x = px + self.cell_w / 2;
        let glyph_y = py + self.cell_h / 2;
        match face {
            TileFace::Down => {
                let hidden = CellStyle {
                    fg: Rgb::new(140, 140, 140),
                    bg: Rgb::new(30, 30, 40),
                    bold: false,
                    dim: true,
                };
                fb.put_char(glyph_x, glyph_y, '?', hidden);
            }
            TileFace::Up(symbol) => {
                let style = CellStyle {
                    fg: symbol_color(symbol),
                    bg: Rgb::new(30, 30, 40),
                    bold: true,
                    dim: false,
                };
                fb.put_char(glyph_x, glyph_y, symbol_glyph(symbol), style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.score_secs as u32, value);
        fb.put_char(end, y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.matched_pairs as u32, value);
        fb.put_char(end, y, '/', value);
        fb.put_u32(end + 1, y, snap.total_pairs as u32, value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Letter drawn on a face-up tile.
fn symbol_glyph(symbol: Symbol) -> char {
    (b'A' + symbol.id() % 26) as char
}

/// Color of a face-up tile's glyph. Glyph and color together stay unique
/// well past the default deck size.
fn symbol_color(symbol: Symbol) -> Rgb {
    const PALETTE: [Rgb; 8] = [
        Rgb::new(80, 220, 220),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(220, 80, 80),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
        Rgb::new(220, 220, 220),
    ];
    PALETTE[(symbol.id() % 8) as usize]
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
