//! Game state module - one puzzle round
//!
//! Ties together the board, the lift controller and the current layout. The
//! UI owns a `GameState` and drives it once per frame: forward clicks and
//! resizes, call [`GameState::tick`], then read [`GameState::is_clear`].

use tracing::info;

use crate::board::Board;
use crate::geometry::{compute_slot_centers, layout, BoardLayout, GeometryConfig, SlotCircle};
use crate::lift::{ClickOutcome, LiftController};
use crate::rng::SimpleRng;
use crate::types::{Ball, Color, Difficulty, PuzzleError};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    lift: LiftController,
    layout: BoardLayout,
    geometry: GeometryConfig,
    viewport: (f64, f64),
    cleared: bool,
    moves: u32,
}

impl GameState {
    /// Wrap an existing board.
    pub fn new(board: Board, viewport: (f64, f64), geometry: GeometryConfig) -> Self {
        let layout = layout(
            viewport.0,
            viewport.1,
            board.circle_num(),
            board.lane_num(),
            &geometry,
        );
        let lift = LiftController::new(&layout);
        Self {
            board,
            lift,
            layout,
            geometry,
            viewport,
            cleared: false,
            moves: 0,
        }
    }

    /// Draw random dimensions for `difficulty` and generate a board.
    pub fn generate(
        difficulty: Difficulty,
        palette: &[Color],
        rng: &mut SimpleRng,
        viewport: (f64, f64),
        geometry: GeometryConfig,
    ) -> Result<Self, PuzzleError> {
        let circles = difficulty.circle_range();
        let lanes = difficulty.lane_range();
        let circle_num = rng.range_inclusive(*circles.start(), *circles.end());
        let lane_num = rng.range_inclusive(*lanes.start(), *lanes.end());

        let board = Board::generate(circle_num, lane_num, palette, rng)?;
        info!(
            difficulty = difficulty.as_str(),
            circle_num, lane_num, "new round"
        );
        Ok(Self::new(board, viewport, geometry))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lift(&self) -> &LiftController {
        &self.lift
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    /// Number of completed moves this round
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Clear condition, evaluated after the last completed move
    pub fn is_clear(&self) -> bool {
        self.cleared
    }

    /// Forward a click on a lane to the lift controller.
    pub fn click_lane(&mut self, lane: usize) -> Result<ClickOutcome, PuzzleError> {
        let outcome = self.lift.handle_click(&mut self.board, lane)?;
        if let ClickOutcome::Moved(_) = outcome {
            self.moves += 1;
            self.cleared = self.board.is_clear();
            if self.cleared {
                info!(moves = self.moves, "board cleared");
            }
        }
        Ok(outcome)
    }

    /// Hit-test a viewport point and forward the click.
    pub fn click_at(&mut self, x: f64, y: f64) -> Result<ClickOutcome, PuzzleError> {
        match self.layout.lane_at(x, y) {
            Some(lane) => self.click_lane(lane),
            None => Ok(ClickOutcome::Ignored),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
        self.layout = layout(
            width,
            height,
            self.board.circle_num(),
            self.board.lane_num(),
            &self.geometry,
        );
        self.lift.on_resize(&self.layout);
    }

    /// Advance animations. Returns true while something is still moving.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.lift.step(elapsed_ms)
    }

    /// Every ball with its on-screen circle, lift offset included.
    pub fn ball_positions(&self) -> Vec<(Ball, SlotCircle)> {
        compute_slot_centers(&self.board, &self.layout)
            .into_iter()
            .filter_map(|mut circle| {
                let ball = self.board.get(circle.slot).flatten()?;
                circle.y += self.lift.offset_for(circle.slot);
                Some((ball, circle))
            })
            .collect()
    }
}
