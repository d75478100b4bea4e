//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Everything drawn, including the pause/play
//! glyph on the button bar, is derived from the snapshot passed in.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

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

/// Clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Restart,
    Pause,
    Close,
}

impl Button {
    /// Left to right on the button bar.
    pub const BAR: [Button; 3] = [Button::Restart, Button::Pause, Button::Close];

    /// Icon for this button given the current game state.
    pub fn glyph(&self, snap: &GameSnapshot) -> char {
        match self {
            Button::Restart => '↺',
            Button::Pause if snap.paused() => '▶',
            Button::Pause => '‖',
            Button::Close => '✕',
        }
    }

    fn background(&self) -> Rgb {
        match self {
            Button::Restart => Rgb::new(0, 0, 255),
            Button::Pause => Rgb::new(0, 160, 0),
            Button::Close => Rgb::new(255, 0, 0),
        }
    }
}

/// Each bar button is `[x]`.
const BUTTON_W: u16 = 3;
const BUTTON_GAP: u16 = 1;
const BAR_W: u16 = BUTTON_W * 3 + BUTTON_GAP * 2;
/// The button bar sits on its own row above the board frame.
const BAR_H: u16 = 1;
const RESTART_LABEL: &str = "[ Restart ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen positions shared by rendering and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    bar_y: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn bar_button_x(&self, index: u16) -> u16 {
        let bar_x = self.start_x + self.frame_w.saturating_sub(BAR_W);
        bar_x + index * (BUTTON_W + BUTTON_GAP)
    }

    fn mid_y(&self) -> u16 {
        self.frame_y.saturating_add(self.frame_h / 2)
    }

    fn centered_x(&self, text_w: u16) -> u16 {
        self.start_x
            .saturating_add(self.frame_w.saturating_sub(text_w) / 2)
    }

    fn restart_rect(&self) -> (u16, u16, u16) {
        let w = RESTART_LABEL.chars().count() as u16;
        (self.centered_x(w), self.mid_y().saturating_add(3), w)
    }
}

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
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

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (GRID_HEIGHT as u16) * self.cell_h + 2;
        let total_h = frame_h + BAR_H;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let bar_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            start_x,
            bar_y,
            frame_y: bar_y + BAR_H,
            frame_w,
            frame_h,
        }
    }

    /// Which button, if any, is under the terminal cell (x, y).
    ///
    /// The game-over restart button only exists while the game is over.
    pub fn button_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Button> {
        let layout = self.layout(viewport);

        if snap.game_over() {
            let (rx, ry, rw) = layout.restart_rect();
            if y == ry && x >= rx && x < rx + rw {
                return Some(Button::Restart);
            }
        }

        if y != layout.bar_y {
            return None;
        }
        Button::BAR
            .iter()
            .enumerate()
            .find(|(i, _)| {
                let bx = layout.bar_button_x(*i as u16);
                x >= bx && x < bx + BUTTON_W
            })
            .map(|(_, button)| *button)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let board_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_px_h = (GRID_HEIGHT as u16) * self.cell_h;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for play area.
        fb.fill_rect(
            layout.start_x + 1,
            layout.frame_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            bg,
        );
        self.draw_border(fb, &layout, border);

        // Settled tiles.
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, &layout, x as i8, y as i8, *color, '█'),
                    None => self.draw_empty_cell(fb, &layout, x as u16, y as u16),
                }
            }
        }

        // Active piece.
        for (x, y) in snap.piece.cells() {
            self.draw_block(fb, &layout, x, y, snap.piece.color, '█');
        }

        // Obstacle, drawn over the piece so contact stays visible.
        if let Some(obstacle) = snap.obstacle {
            self.draw_block(fb, &layout, obstacle.x, obstacle.y, obstacle.color, '▓');
        }

        self.draw_button_bar(fb, snap, &layout);
        self.draw_side_panel(fb, snap, viewport, &layout);

        // Overlays.
        if let Some(reason) = snap.phase.game_over_reason() {
            self.draw_game_over(fb, snap, &layout, reason.message());
        } else if snap.paused() {
            self.draw_overlay_text(fb, &layout, 0, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout, style: CellStyle) {
        let (x, y, w, h) = (
            layout.start_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
        );
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40))
        };
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    /// Draw one colored tile; cells off the grid (e.g. above row 0) are skipped.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i8,
        y: i8,
        color: Rgb,
        ch: char,
    ) {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(color, color.darken(40))
        };
        self.fill_cell_rect(fb, layout, x as u16, y as u16, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.frame_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_button_bar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        for (i, button) in Button::BAR.iter().enumerate() {
            let style = CellStyle {
                bold: true,
                ..CellStyle::new(Rgb::new(255, 255, 255), button.background())
            };
            let x = layout.bar_button_x(i as u16);
            fb.put_char(x, layout.bar_y, '[', style);
            fb.put_char(x + 1, layout.bar_y, button.glyph(snap), style);
            fb.put_char(x + 2, layout.bar_y, ']', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let w = fb.put_u32(panel_x, y, snap.remaining_secs(), value);
        fb.put_char(panel_x + w, y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LIVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lives, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        if panel_w < 16 {
            return;
        }
        let help = CellStyle { dim: true, ..value };
        for line in [
            "←→↓  move",
            "↑    rotate",
            "p    pause",
            "r    restart",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        reason: &str,
    ) {
        self.draw_overlay_text(fb, layout, -3, "Game Over!");

        let style = overlay_style();
        let label = "Final Score: ";
        let score_w = digit_count(snap.score);
        let text_w = label.chars().count() as u16 + score_w;
        let x = layout.centered_x(text_w);
        let y = layout.mid_y().saturating_sub(1);
        fb.put_str(x, y, label, style);
        fb.put_u32(x + label.chars().count() as u16, y, snap.score, style);

        self.draw_overlay_text(fb, layout, 1, reason);

        let (rx, ry, _) = layout.restart_rect();
        let button = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 160, 0))
        };
        fb.put_str(rx, ry, RESTART_LABEL, button);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, dy: i16, text: &str) {
        let y = layout.mid_y().saturating_add_signed(dy);
        let x = layout.centered_x(text.chars().count() as u16);
        fb.put_str(x, y, text, overlay_style());
    }
}

fn overlay_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_000_000_000), 10);
    }

    #[test]
    fn layout_puts_bar_above_frame() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(22, 18));
        assert_eq!(layout.bar_y, 0);
        assert_eq!(layout.frame_y, 1);
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 17);
        assert_eq!(layout.bar_button_x(0), 11);
        assert_eq!(layout.bar_button_x(2), 19);
    }
}
