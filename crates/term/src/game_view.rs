//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceDef};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Board position inside the framebuffer, computed once per frame
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps cells roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let w = u16::from(BOARD_WIDTH) * self.cell_w + 2;
        let h = u16::from(BOARD_HEIGHT) + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        draw_border(fb, frame, Style::plain(Rgb::new(200, 200, 200), SCREEN_BG));
        self.draw_well(fb, snap, frame);
        self.draw_side_panel(fb, snap, viewport, frame);

        let overlay = match snap.status {
            GameStatus::Idle => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, frame, text, 0);
        }
        if is_new_record(snap) {
            draw_overlay_text(fb, frame, "NEW RECORD", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let empty = Style::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        let ghost = Style::plain(Rgb::new(140, 140, 140), WELL_BG).dim();

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', Style::plain(palette(*color), WELL_BG).bold()),
                    None if snap.is_ghost_cell(x as i8, y as i8) => ('░', ghost),
                    None => ('·', empty),
                };
                let px = frame.x + 1 + x as u16 * self.cell_w;
                let py = frame.y + 1 + y as u16;
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        let stats = snap.stats;
        for (name, n) in [
            ("SCORE", stats.score),
            ("HIGH", stats.high_score),
            ("LEVEL", stats.level),
            ("LINES", stats.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match snap.next {
            Some(def) => self.draw_preview(fb, def, panel_x, y),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }

    /// Next piece drawn at its spawn shape, top-left aligned
    fn draw_preview(&self, fb: &mut FrameBuffer, def: PieceDef, x: u16, y: u16) {
        let min_x = def.shape.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let min_y = def.shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);
        let style = Style::plain(palette(def.color), SCREEN_BG).bold();

        for &(dx, dy) in def.shape.iter() {
            let px = x.saturating_add((dx - min_x) as u16 * self.cell_w);
            let py = y.saturating_add((dy - min_y) as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

/// Terminal color for a cell color tag
pub fn palette(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Accent => Rgb::new(170, 110, 240),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Pink => Rgb::new(240, 110, 170),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
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

/// The finished game set the high score
fn is_new_record(snap: &GameSnapshot) -> bool {
    snap.game_over() && snap.stats.score > 0 && snap.stats.score == snap.stats.high_score
}

/// Centered text `line` rows below the middle of the well
fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str, line: u16) {
    let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = Style::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
}
