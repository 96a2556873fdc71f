//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The core works in abstract viewport units. Here one unit is a column wide
//! and half a row tall, so a terminal of `w x h` cells is a `w x 2h` unit
//! viewport and every cell holds two stacked pixels.

use crate::buttons::{scene_buttons, Button};
use crate::core::{BoardLayout, GameState, Scene, Session, SlotCircle};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

    /// Size in viewport units.
    pub fn units(&self) -> (f64, f64) {
        viewport_units(self.width, self.height)
    }
}

/// Viewport size in units for a terminal of `columns x rows`.
pub fn viewport_units(columns: u16, rows: u16) -> (f64, f64) {
    (columns as f64, rows as f64 * 2.0)
}

/// Unit-space point at the middle of a terminal cell.
pub fn cell_to_units(column: u16, row: u16) -> (f64, f64) {
    (column as f64 + 0.5, row as f64 * 2.0 + 1.0)
}

/// Colors used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub stage: Rgb,
    pub line: Rgb,
    pub text: Rgb,
    pub button: Rgb,
    pub button_selected: Rgb,
    pub button_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::new(20, 20, 28),
            stage: Rgb::new(128, 128, 128),
            line: Rgb::new(10, 10, 10),
            text: Rgb::new(220, 220, 220),
            button: Rgb::new(180, 180, 180),
            button_selected: Rgb::new(150, 150, 150),
            button_text: Rgb::new(0, 0, 0),
        }
    }
}

/// Below this size only a hint is drawn.
const MIN_COLUMNS: u16 = 40;
const MIN_ROWS: u16 = 12;

const TITLE_HELP: &str = "1/2/3 difficulty  Enter start  q quit";
const GAME_HELP: &str = "click a lane to lift, another to drop  r regenerate  t title  q quit";
const END_HELP: &str = "Enter play again  t title  q quit";

#[derive(Debug, Clone, Default)]
pub struct GameView {
    theme: Theme,
}

impl GameView {
    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let base = CellStyle::new(self.theme.text, self.theme.background);
        fb.clear(Cell {
            ch: ' ',
            style: base,
        });

        if viewport.width < MIN_COLUMNS || viewport.height < MIN_ROWS {
            fb.put_str(0, 0, "Terminal too small", base.bold());
            return;
        }

        let rows = viewport.height;
        let center = viewport.width / 2;

        match session.scene() {
            Scene::Title => {
                fb.put_str_centered(center, rows / 4, "BALL SORT", base.bold());
                let line = format!("Difficulty: {}", session.difficulty().label());
                fb.put_str_centered(center, rows * 2 / 5, &line, base);
                fb.put_str_centered(center, rows - 1, TITLE_HELP, base.dim());
            }
            Scene::Game => {
                if let Some(game) = session.game() {
                    self.draw_stage(game, fb);
                    fb.put_str(1, 0, "Moves:", base);
                    fb.put_u32(8, 0, game.moves(), base.bold());
                }
                fb.put_str_centered(center, rows - 1, GAME_HELP, base.dim());
            }
            Scene::End => {
                fb.put_str_centered(center, rows * 3 / 10, "Cleared!", base.bold());
                if let Some(game) = session.game() {
                    let line = format!("Solved in {} moves", game.moves());
                    fb.put_str_centered(center, rows * 3 / 10 + 2, &line, base);
                }
                fb.put_str_centered(center, rows - 1, END_HELP, base.dim());
            }
        }

        for button in scene_buttons(session, viewport.units()) {
            self.draw_button(&button, fb);
        }
    }

    /// Render into a newly allocated framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_stage(&self, game: &GameState, fb: &mut FrameBuffer) {
        let layout = game.layout();
        let stage = layout.stage();
        if layout.box_size() <= 0.0 {
            return;
        }

        let mut by_lane: Vec<Vec<(Rgb, SlotCircle)>> = vec![Vec::new(); layout.lanes().len()];
        for (ball, circle) in game.ball_positions() {
            if let Some(lane) = by_lane.get_mut(circle.slot.lane) {
                lane.push((ball.color.into(), circle));
            }
        }

        // Lifted balls leave the stage upwards; leave room for one slot.
        let top = stage.top() - layout.lift_offset() - layout.box_size();
        let bottom = stage.bottom() + layout.line_width();
        let right = stage.right() + layout.line_width();

        let col0 = stage.left().floor().max(0.0) as u16;
        let col1 = (right.ceil().max(0.0) as u16).min(fb.width());
        let row0 = (top / 2.0).floor().max(0.0) as u16;
        let row1 = ((bottom / 2.0).ceil().max(0.0) as u16).min(fb.height());

        for row in row0..row1 {
            for col in col0..col1 {
                let x = col as f64 + 0.5;
                let upper = self.pixel(layout, &by_lane, x, row as f64 * 2.0 + 0.5);
                let lower = self.pixel(layout, &by_lane, x, row as f64 * 2.0 + 1.5);
                fb.put_pixels(col, row, upper, lower);
            }
        }
    }

    /// Color of a single unit-space pixel: ball, then separator, then stage.
    fn pixel(
        &self,
        layout: &BoardLayout,
        by_lane: &[Vec<(Rgb, SlotCircle)>],
        x: f64,
        y: f64,
    ) -> Rgb {
        if let Some(lane) = layout.lane_at(x, layout.stage().top()) {
            let hit = by_lane[lane]
                .iter()
                .find(|(_, circle)| circle.contains(x, y));
            if let Some((color, _)) = hit {
                return *color;
            }
        }

        let stage = layout.stage();
        let lw = layout.line_width();
        let in_columns = x >= stage.left() && x < stage.right() + lw;
        let in_rows = y >= stage.top() && y < stage.bottom();

        if in_columns && y >= stage.bottom() && y < stage.bottom() + lw {
            return self.theme.line;
        }
        if in_columns && in_rows {
            let along = (x - stage.left()) % layout.box_size();
            if along < lw {
                return self.theme.line;
            }
            return self.theme.stage;
        }
        self.theme.background
    }

    fn draw_button(&self, button: &Button, fb: &mut FrameBuffer) {
        let bg = if button.selected {
            self.theme.button_selected
        } else {
            self.theme.button
        };
        let mut style = CellStyle::new(self.theme.button_text, bg);
        if button.selected {
            style = style.bold();
        }

        let r = button.rect;
        let col0 = r.left().floor().max(0.0) as u16;
        let col1 = r.right().ceil().max(0.0) as u16;
        let row0 = (r.top() / 2.0).floor().max(0.0) as u16;
        let row1 = (r.bottom() / 2.0).ceil().max(0.0) as u16;

        for row in row0..row1 {
            for col in col0..col1 {
                let (x, y) = cell_to_units(col, row);
                if r.contains(x, y) {
                    fb.put_char(col, row, ' ', style);
                }
            }
        }

        let (cx, cy) = r.center();
        let col = cx.max(0.0) as u16;
        let row = (cy / 2.0).max(0.0) as u16;
        fb.put_str_centered(col, row, button.label, style);
    }
}
