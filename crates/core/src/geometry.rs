//! Geometry module - layout of the stage, lanes and balls
//!
//! Converts logical slot coordinates into viewport-space circles for rendering
//! and hit-testing. Contains no game rules.
//!
//! Coordinates grow right and down. The stage is sized from the viewport
//! height first; when the result would be wider than 95% of the viewport it
//! is re-derived from the width instead.

use crate::board::Board;
use crate::types::SlotRef;

/// Axis-aligned rectangle in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Which point of a rectangle a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    MidTop,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    MidBottom,
    BottomRight,
}

impl Anchor {
    /// Offset of the anchor point from the top-left corner, as fractions of the size.
    fn fraction(&self) -> (f64, f64) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::MidTop => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::MidLeft => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::MidRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::MidBottom => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

/// Place a rectangle of `size` so that its `anchor` point lands on `point`.
///
/// # Examples
///
/// ```
/// use tui_ballsort_core::geometry::{position, Anchor, Rect};
///
/// let r = position((10.0, 4.0), Anchor::Center, (50.0, 20.0));
/// assert_eq!(r, Rect::new(45.0, 18.0, 10.0, 4.0));
/// ```
pub fn position(size: (f64, f64), anchor: Anchor, point: (f64, f64)) -> Rect {
    let (w, h) = size;
    let (fx, fy) = anchor.fraction();
    Rect::new(point.0 - w * fx, point.1 - h * fy, w, h)
}

/// Sizes that do not depend on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Width of the lane separator lines
    pub line_width: f64,
    /// Height reserved for the button row below the stage
    pub button_height: f64,
    /// Lift height as a fraction of the lane width
    pub lift_ratio: f64,
}

impl GeometryConfig {
    /// Pixel-based defaults (3px lines, 60px buttons).
    pub const PIXELS: GeometryConfig = GeometryConfig {
        line_width: 3.0,
        button_height: 60.0,
        lift_ratio: 0.2,
    };

    /// Terminal defaults: one unit is a column wide and half a row tall.
    pub const TERMINAL: GeometryConfig = GeometryConfig {
        line_width: 1.0,
        button_height: 6.0,
        lift_ratio: 0.5,
    };
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::PIXELS
    }
}

/// A ball-sized circle at a slot position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotCircle {
    pub slot: SlotRef,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl SlotCircle {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Stage rectangle plus one hit-testable rectangle per lane.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    stage: Rect,
    lanes: Vec<Rect>,
    box_size: f64,
    line_width: f64,
    lift_ratio: f64,
}

/// Compute the board layout for a viewport.
pub fn layout(
    viewport_width: f64,
    viewport_height: f64,
    circle_num: usize,
    lane_num: usize,
    config: &GeometryConfig,
) -> BoardLayout {
    let circles = circle_num.max(1) as f64;
    let lanes = lane_num.max(1) as f64;

    let mut stage_h = (viewport_height * 0.8 - config.button_height).max(0.0);
    let mut box_size = (stage_h / circles).floor();
    let mut stage_w = box_size * lanes;

    if stage_w > viewport_width * 0.95 {
        stage_w = (viewport_width * 0.8).max(0.0);
        box_size = (stage_w / lanes).floor();
        stage_h = box_size * circles;
    }

    let stage = position(
        (stage_w, stage_h),
        Anchor::Center,
        (
            viewport_width / 2.0,
            viewport_height / 2.0 - config.button_height,
        ),
    );

    let lane_rects = (0..lane_num)
        .map(|i| Rect::new(stage.x + i as f64 * box_size, stage.y, box_size, stage_h))
        .collect();

    BoardLayout {
        stage,
        lanes: lane_rects,
        box_size,
        line_width: config.line_width,
        lift_ratio: config.lift_ratio,
    }
}

impl BoardLayout {
    pub fn stage(&self) -> Rect {
        self.stage
    }

    pub fn lanes(&self) -> &[Rect] {
        &self.lanes
    }

    /// Lane width, also the height of one slot
    pub fn box_size(&self) -> f64 {
        self.box_size
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn radius(&self) -> f64 {
        ((self.box_size - self.line_width) / 2.0).max(0.0)
    }

    /// How far a lifted ball rises above its rest position
    pub fn lift_offset(&self) -> f64 {
        self.box_size * self.lift_ratio
    }

    /// Lane under a viewport point
    pub fn lane_at(&self, x: f64, y: f64) -> Option<usize> {
        self.lanes.iter().position(|r| r.contains(x, y))
    }

    /// Rest position of a slot; slots stack bottom-up from the lane base.
    pub fn slot_circle(&self, at: SlotRef) -> SlotCircle {
        let radius = self.radius();
        SlotCircle {
            slot: at,
            x: self.stage.left()
                + self.box_size * at.lane as f64
                + (self.box_size + self.line_width) / 2.0,
            y: self.stage.bottom() - radius - radius * 2.0 * at.slot as f64,
            radius,
        }
    }
}

/// Rest circles of every occupied slot of the board.
pub fn compute_slot_centers(board: &Board, layout: &BoardLayout) -> Vec<SlotCircle> {
    let mut out = Vec::with_capacity(board.ball_count());
    for (lane_idx, lane) in board.lanes().iter().enumerate() {
        for (slot_idx, slot) in lane.slots().iter().enumerate() {
            if slot.is_some() {
                out.push(layout.slot_circle(SlotRef::new(lane_idx, slot_idx)));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_positions() {
        let size = (4.0, 2.0);
        let p = (10.0, 10.0);
        assert_eq!(position(size, Anchor::TopLeft, p), Rect::new(10.0, 10.0, 4.0, 2.0));
        assert_eq!(position(size, Anchor::MidTop, p), Rect::new(8.0, 10.0, 4.0, 2.0));
        assert_eq!(position(size, Anchor::BottomRight, p), Rect::new(6.0, 8.0, 4.0, 2.0));
        assert_eq!(position(size, Anchor::MidLeft, p), Rect::new(10.0, 9.0, 4.0, 2.0));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, 10.0));
    }

    #[test]
    fn test_layout_height_driven() {
        // 1000x800 window, 3 balls per lane, 3 lanes.
        let l = layout(1000.0, 800.0, 3, 3, &GeometryConfig::PIXELS);
        // stage_h = 800*0.8 - 60 = 580, box = floor(580/3) = 193
        assert_eq!(l.box_size(), 193.0);
        assert_eq!(l.stage().w, 579.0);
        assert_eq!(l.stage().h, 580.0);
        assert_eq!(l.stage().center(), (500.0, 340.0));
        assert_eq!(l.lanes().len(), 3);
        assert_eq!(l.lanes()[1].x, l.stage().x + 193.0);
    }

    #[test]
    fn test_layout_width_driven_when_too_wide() {
        // 11 lanes of 3 balls do not fit 95% of a 1000px width.
        let l = layout(1000.0, 800.0, 3, 11, &GeometryConfig::PIXELS);
        // stage_w = 800, box = floor(800/11) = 72, stage_h = 216
        assert_eq!(l.box_size(), 72.0);
        assert_eq!(l.stage().w, 800.0);
        assert_eq!(l.stage().h, 216.0);
    }

    #[test]
    fn test_layout_tiny_viewport_clamps() {
        let l = layout(10.0, 10.0, 5, 5, &GeometryConfig::PIXELS);
        assert!(l.box_size() >= 0.0);
        assert_eq!(l.radius(), 0.0);
    }

    #[test]
    fn test_slot_circle_stacks_bottom_up() {
        let l = layout(1000.0, 800.0, 3, 3, &GeometryConfig::PIXELS);
        let r = (193.0 - 3.0) / 2.0;
        let c0 = l.slot_circle(SlotRef::new(0, 0));
        let c1 = l.slot_circle(SlotRef::new(0, 1));
        let c_lane2 = l.slot_circle(SlotRef::new(2, 0));

        assert_eq!(c0.radius, r);
        assert_eq!(c0.y, l.stage().bottom() - r);
        assert_eq!(c1.y, c0.y - 2.0 * r);
        assert_eq!(c0.x, l.stage().left() + (193.0 + 3.0) / 2.0);
        assert_eq!(c_lane2.x - c0.x, 2.0 * 193.0);
    }

    #[test]
    fn test_lane_hit_testing() {
        let l = layout(1000.0, 800.0, 3, 3, &GeometryConfig::PIXELS);
        let (_, cy) = l.stage().center();
        let first = l.lanes()[0];
        assert_eq!(l.lane_at(first.x + 1.0, cy), Some(0));
        assert_eq!(l.lane_at(l.lanes()[2].x + 1.0, cy), Some(2));
        assert_eq!(l.lane_at(0.0, 0.0), None);
    }
}
