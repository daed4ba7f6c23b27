//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, Color, Coord, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [(&str, &str); 5] = [
    ("<- ->", "move"),
    ("UP", "rotate"),
    ("P", "pause"),
    ("R", "restart"),
    ("Q", "quit"),
];

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

/// Board geometry resolved against a viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Renders the board, the side panel and status overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `paused` is driver state; the snapshot only knows running/game over.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG)));

        let frame = self.frame(viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            Glyph::new(' ', CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG)),
        );
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (r, row) in snap.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                self.draw_board_cell(fb, frame, r as u16, c as u16, *cell);
            }
        }

        if let Some(active) = snap.active {
            for coord in active.cells.into_iter().filter(|c| c.in_bounds()) {
                self.draw_board_cell(
                    fb,
                    frame,
                    coord.row as u16 - 1,
                    coord.col as u16 - 1,
                    Cell::filled(active.color),
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            draw_overlay_text(fb, frame, "GAME OVER");
        } else if paused {
            draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, paused, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left character of board cell
    /// `(row, col)`, both 1-based. `None` off the board.
    pub fn cell_origin(&self, viewport: Viewport, coord: Coord) -> Option<(u16, u16)> {
        if !coord.in_bounds() {
            return None;
        }
        let frame = self.frame(viewport);
        Some((
            frame.x + 1 + (coord.col as u16 - 1) * self.cell_w,
            frame.y + 1 + (coord.row as u16 - 1) * self.cell_h,
        ))
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, cell: Cell) {
        let glyph = match cell.color.filter(|_| cell.occupied) {
            Some(color) => Glyph::new('█', CellStyle::new(color_rgb(color), PLAYFIELD_BG).bold()),
            None => Glyph::new('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim()),
        };
        fb.fill_rect(
            frame.x + 1 + col * self.cell_w,
            frame.y + 1 + row * self.cell_h,
            self.cell_w,
            self.cell_h,
            glyph,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for (key, what) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, value);
            fb.put_str(panel_x.saturating_add(6), y, what, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    let at = |ch| Glyph::new(ch, style);

    fb.put(x, y, at('┌'));
    fb.put(x + w - 1, y, at('┐'));
    fb.put(x, y + h - 1, at('└'));
    fb.put(x + w - 1, y + h - 1, at('┘'));
    for dx in 1..w - 1 {
        fb.put(x + dx, y, at('─'));
        fb.put(x + dx, y + h - 1, at('─'));
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, at('│'));
        fb.put(x + w - 1, y + dy, at('│'));
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(
        x,
        mid_y,
        text,
        CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold(),
    );
}

/// Terminal color for a block color name.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 60, 60),
        Color::Lime => Rgb::new(120, 230, 80),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::SkyBlue => Rgb::new(110, 190, 240),
        Color::Blue => Rgb::new(70, 100, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Purple => Rgb::new(170, 90, 210),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_centered_in_viewport() {
        let view = GameView::default();
        let f = view.frame(Viewport::new(62, 30));
        assert_eq!((f.w, f.h), (22, 22));
        assert_eq!((f.x, f.y), (20, 4));
    }

    #[test]
    fn top_anchor_pins_frame_to_row_zero() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(view.frame(Viewport::new(80, 40)).y, 0);
    }

    #[test]
    fn cell_origin_maps_one_based_coords() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(22, 22);
        assert_eq!(view.cell_origin(vp, Coord::new(1, 1)), Some((1, 1)));
        assert_eq!(view.cell_origin(vp, Coord::new(20, 10)), Some((19, 20)));
        assert_eq!(view.cell_origin(vp, Coord::new(0, 1)), None);
    }

    #[test]
    fn every_color_maps_to_distinct_rgb() {
        let all = [
            Color::Red,
            Color::Lime,
            Color::Yellow,
            Color::SkyBlue,
            Color::Blue,
            Color::Orange,
            Color::Purple,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(color_rgb(*a), color_rgb(*b));
            }
        }
    }
}
