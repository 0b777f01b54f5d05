//! GameView: maps the engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Block, GamePhase, GameLoop, Shape, Swiftris};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BlockColor;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// State owned outside the engine that the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView<'a> {
    pub paused: bool,
    pub high_score: u32,
    pub message: Option<&'a str>,
}

impl<'a> StatusView<'a> {
    pub fn from_loop(game_loop: &GameLoop, message: Option<&'a str>) -> Self {
        Self {
            paused: game_loop.is_paused(),
            high_score: game_loop.high_score(),
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board, the shapes and the side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Bordered playfield rectangle, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        game: &Swiftris,
        status: &StatusView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let columns = game.board().columns() as u16;
        let rows = game.board().rows() as u16;
        let frame_w = columns * self.cell_w + 2;
        let frame_h = rows * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, frame, border);

        for row in 0..rows {
            for column in 0..columns {
                match game.board().get(column as usize, row as usize) {
                    Some(block) => self.draw_block(fb, frame, column, row, block.color),
                    None => self.draw_empty_cell(fb, frame, column, row),
                }
            }
        }

        if let Some(shape) = game.falling_shape() {
            for block in shape.blocks() {
                if let Some((column, row)) = on_board(block, columns, rows) {
                    self.draw_block(fb, frame, column, row, block.color);
                }
            }
        }

        self.draw_side_panel(fb, game, status, viewport, frame);

        if status.paused {
            self.draw_overlay_text(fb, frame, 0, "PAUSED");
        } else if game.phase() == GamePhase::GameOver {
            self.draw_overlay_text(fb, frame, 0, "GAME OVER");
        }
        if let Some(message) = status.message {
            self.draw_overlay_text(fb, frame, 2, message);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Swiftris, status: &StatusView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, column: u16, row: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell(fb, frame.x + 1, frame.y + 1, column, row, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, column: u16, row: u16, color: BlockColor) {
        let style = CellStyle::new(block_rgb(color), PLAYFIELD_BG).bold();
        self.fill_cell(fb, frame.x + 1, frame.y + 1, column, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        column: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + column * self.cell_w;
        let py = origin_y + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Swiftris,
        status: &StatusView<'_>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, number) in [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("BEST", status.high_score),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = game.next_shape() {
            self.draw_preview(fb, panel_x, y, next);
        }
    }

    /// Draw a shape in a 4x4 box, relative to its own anchor.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        for block in shape.blocks() {
            // Offsets reach one column left of the anchor at most.
            let column = block.column - shape.column() + 1;
            let row = block.row - shape.row();
            if (0..4).contains(&column) && (0..4).contains(&row) {
                let style = CellStyle::new(block_rgb(block.color), PANEL_BG).bold();
                self.fill_cell(fb, x, y, column as u16, row as u16, '█', style);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, offset_y: u16, text: &str) {
        let y = frame.y.saturating_add(frame.h / 2).saturating_add(offset_y);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}

fn on_board(block: &Block, columns: u16, rows: u16) -> Option<(u16, u16)> {
    if block.column < 0 || block.row < 0 {
        return None;
    }
    let (column, row) = (block.column as u16, block.row as u16);
    (column < columns && row < rows).then_some((column, row))
}

pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Purple => Rgb::new(200, 120, 220),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Teal => Rgb::new(80, 220, 220),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
    }
}
