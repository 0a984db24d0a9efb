//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Side of the square next-piece preview grid, in board cells.
const PREVIEW_CELLS: u16 = 4;

const CONTROLS: [&str; 6] = [
    "A/D   move",
    "W     rotate",
    "S     soft drop",
    "SPACE hard drop",
    "P     pause",
    "Q     quit",
];

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (snap.width as u16) * self.cell_w;
        let board_px_h = snap.height as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, px, py, kind),
                    None => self.draw_empty(fb, px, py),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "Press any key"],
            );
        } else if snap.paused {
            draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["PAUSED", "Press P to resume"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title screen shown before the first key press.
    pub fn render_splash(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let title = CellStyle::new(Rgb::new(80, 220, 220), Rgb::new(0, 0, 0)).bold();
        let text = CellStyle::default();

        let mid = viewport.height / 2;
        put_centered(&mut fb, viewport.width, mid.saturating_sub(1), "TERM TETRIS", title);
        put_centered(
            &mut fb,
            viewport.width,
            mid.saturating_add(1),
            "Press any key to start...",
            text,
        );
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 80), PLAYFIELD_BG);
        fb.put_char(px, py, '·', style);
        for dx in 1..self.cell_w {
            fb.put_char(px + dx, py, ' ', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), PLAYFIELD_BG).bold();
        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS + 2;
        draw_border(fb, panel_x, y, box_w, box_h, value);
        for &(dx, dy) in snap.next.offsets.iter() {
            // Offsets span -1..=2, so shifting by one fits the 4x4 box.
            let (cx, cy) = (dx + 1, dy + 1);
            if (0..PREVIEW_CELLS as i8).contains(&cx) && (0..PREVIEW_CELLS as i8).contains(&cy) {
                let px = panel_x + 1 + cx as u16 * self.cell_w;
                let py = y + 1 + cy as u16;
                let style = CellStyle::new(piece_color(snap.next.kind), Rgb::new(0, 0, 0));
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
            }
        }
        y += box_h + 1;

        let dim = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[&str],
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let mid_y = start_y.saturating_add(frame_h / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
    }
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(width.saturating_sub(text_w) / 2, y, text, style);
}

/// Terminal colour for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(235, 235, 235),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
    }
}
