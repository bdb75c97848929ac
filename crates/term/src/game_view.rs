//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::shape_cells;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Key help shown in the side panel, as (keys, action) pairs.
pub const CONTROLS: [(&str, &str); 7] = [
    ("←/→", "move"),
    ("↑", "rotate"),
    ("↓", "soft drop"),
    ("space", "hard drop"),
    ("p", "pause"),
    ("r", "restart"),
    ("q", "quit"),
];

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

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

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen placement of the board frame for one render.
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

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (snap.width as u16).saturating_mul(self.cell_w);
        let board_px_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame = Frame {
            x: 0,
            y: 0,
            w: board_px_w.saturating_add(2),
            h: board_px_h.saturating_add(2),
        };
        // Leave room for the side panel when centering horizontally.
        let total_w = frame.w.saturating_add(PANEL_GAP + PANEL_MIN_W);
        let frame = Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame.h) / 2,
                AnchorY::Top => 0,
            },
            ..frame
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, frame, border);

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_board_cell(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Ghost below the active piece.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            let ghost_style = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
            for (dx, dy) in shape_cells(active.kind, active.rotation) {
                if let Some((x, y)) = on_board(snap, active.x + dx, ghost_y + dy) {
                    self.fill_cell_rect(fb, frame, x, y, '░', ghost_style);
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in shape_cells(active.kind, active.rotation) {
                if let Some((x, y)) = on_board(snap, active.x + dx, active.y + dy) {
                    self.draw_board_cell(fb, frame, x, y, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused() {
            self.draw_overlay_text(fb, frame, 0, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay_text(fb, frame, 0, "GAME OVER");
            self.draw_overlay_text(fb, frame, 1, "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), PLAY_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(kind) = snap.next {
            fb.put_char(panel_x + 5, y, kind.letter(), value);
            self.draw_preview(fb, panel_x, y.saturating_add(1), kind);
        }
        y = y.saturating_add(1);
        y = y.saturating_add(PREVIEW_ROWS + 1);

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "CONTROLS", label);
        y = y.saturating_add(1);
        let dim = CellStyle { dim: true, ..value };
        for (keys, action) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            let end = fb.put_str(panel_x, y, keys, value);
            fb.put_str(end.max(panel_x + 6), y, action, dim);
            y = y.saturating_add(1);
        }
    }

    /// Draw the rotation-0 shape of `kind` with the same cell aspect as the board.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), Rgb::new(0, 0, 0)).bold();
        for (dx, dy) in shape_cells(kind, 0) {
            let px = x + (dx as u16) * self.cell_w;
            let py = y + (dy as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 16;
const PREVIEW_ROWS: u16 = 4;

fn on_board(snap: &GameSnapshot, x: i32, y: i32) -> Option<(u16, u16)> {
    let in_x = x >= 0 && (x as usize) < snap.width;
    let in_y = y >= 0 && (y as usize) < snap.height;
    (in_x && in_y).then_some((x as u16, y as u16))
}
