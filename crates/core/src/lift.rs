//! Lift module - the lift/drop state machine
//!
//! A single "lane clicked" event drives every transition:
//!
//! | Phase | Click | Result |
//! |-------|-------|--------|
//! | `Idle` | lane with balls | animate its top ball up, then `Lifted` |
//! | `Idle` | empty lane | nothing |
//! | `Lifted(L)` | `L` | animate back down, then `Idle` |
//! | `Lifted(L)` | `M` with room | move the ball, `Idle` at once |
//! | `Lifted(L)` | `M` full | nothing |
//!
//! While a ball is still rising the lane already counts as lifted. While a
//! ball is sinking back the controller counts as idle; lifting another lane
//! snaps the sinking ball to rest first.
//!
//! Offsets are vertical displacements from a ball's rest position (negative
//! is up), so a layout change keeps the relative progress of an animation.

use tracing::{debug, info};

use crate::board::{Board, Move};
use crate::geometry::BoardLayout;
use crate::types::{PuzzleError, SlotRef, FRAME_MS, LIFT_FRAMES};

/// Vertical direction of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// -1 for up, +1 for down (screen coordinates grow downwards)
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiftPhase {
    Idle,
    Animating {
        lane: usize,
        direction: Direction,
        target_offset: f64,
    },
    Lifted {
        lane: usize,
    },
}

/// Read-only view of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftState {
    /// Lane whose top ball is lifted or rising
    pub lane: Option<usize>,
    /// Ball currently displaced from its rest position
    pub animating_slot: Option<SlotRef>,
    pub offset: f64,
    pub target_offset: f64,
    /// -1 rising, +1 sinking, 0 at rest
    pub direction: i8,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing to lift, or the lane index was out of range
    Ignored,
    /// Started lifting the top ball of `lane`
    Lifting { lane: usize },
    /// Started putting the lifted ball of `lane` back
    Cancelling { lane: usize },
    /// The lifted ball moved to another lane
    Moved(Move),
    /// Destination lane is full; the lift stays
    Blocked { from: usize, to: usize },
}

#[derive(Debug, Clone)]
pub struct LiftController {
    phase: LiftPhase,
    /// Back-reference into the board, never a copy of the ball.
    slot: Option<SlotRef>,
    offset: f64,
    lift_offset: f64,
    /// Offset units per frame
    speed: f64,
}

impl LiftController {
    pub fn new(layout: &BoardLayout) -> Self {
        let lift_offset = layout.lift_offset();
        Self {
            phase: LiftPhase::Idle,
            slot: None,
            offset: 0.0,
            lift_offset,
            speed: lift_offset / LIFT_FRAMES,
        }
    }

    pub fn phase(&self) -> LiftPhase {
        self.phase
    }

    pub fn state(&self) -> LiftState {
        let (lane, target_offset, direction) = match self.phase {
            LiftPhase::Idle => (None, 0.0, 0),
            LiftPhase::Lifted { lane } => (Some(lane), -self.lift_offset, 0),
            LiftPhase::Animating {
                lane,
                direction,
                target_offset,
            } => {
                let held = (direction == Direction::Up).then_some(lane);
                (held, target_offset, direction.sign())
            }
        };
        LiftState {
            lane,
            animating_slot: self.slot,
            offset: self.offset,
            target_offset,
            direction,
        }
    }

    /// Lane whose ball is lifted or on its way up.
    pub fn held_lane(&self) -> Option<usize> {
        match self.phase {
            LiftPhase::Lifted { lane } => Some(lane),
            LiftPhase::Animating {
                lane,
                direction: Direction::Up,
                ..
            } => Some(lane),
            _ => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, LiftPhase::Animating { .. })
    }

    /// Vertical displacement to apply to the ball at `at` when drawing it.
    pub fn offset_for(&self, at: SlotRef) -> f64 {
        if self.slot == Some(at) {
            self.offset
        } else {
            0.0
        }
    }

    /// Drop any lift and put the tracked ball back at rest.
    pub fn reset(&mut self) {
        self.phase = LiftPhase::Idle;
        self.slot = None;
        self.offset = 0.0;
    }

    /// Handle a click on `lane`.
    pub fn handle_click(
        &mut self,
        board: &mut Board,
        lane: usize,
    ) -> Result<ClickOutcome, PuzzleError> {
        if lane >= board.lane_num() {
            return Ok(ClickOutcome::Ignored);
        }

        if let Some(held) = self.held_lane() {
            if held == lane {
                self.phase = LiftPhase::Animating {
                    lane,
                    direction: Direction::Down,
                    target_offset: 0.0,
                };
                debug!(lane, "cancel lift");
                return Ok(ClickOutcome::Cancelling { lane });
            }

            if !board.is_legal_drop(held, lane) {
                debug!(from = held, to = lane, "drop blocked, lane full");
                return Ok(ClickOutcome::Blocked {
                    from: held,
                    to: lane,
                });
            }

            let mv = board.apply_move(held, lane)?;
            // The slot reference is stale from here on.
            self.reset();
            info!(from = mv.from, to = mv.to, "moved ball");
            return Ok(ClickOutcome::Moved(mv));
        }

        if !board.is_legal_lift(lane) {
            return Ok(ClickOutcome::Ignored);
        }

        match self.phase {
            // Re-lift the ball that is still sinking, from where it is.
            LiftPhase::Animating {
                lane: sinking,
                direction: Direction::Down,
                ..
            } if sinking == lane => {}
            _ => self.reset(),
        }

        self.slot = board.topmost_occupied(lane);
        self.phase = LiftPhase::Animating {
            lane,
            direction: Direction::Up,
            target_offset: -self.lift_offset,
        };
        debug!(lane, "lift");
        Ok(ClickOutcome::Lifting { lane })
    }

    /// Advance the animation by `elapsed_ms`. Returns true while still animating.
    pub fn step(&mut self, elapsed_ms: u32) -> bool {
        let LiftPhase::Animating {
            lane,
            direction,
            target_offset,
        } = self.phase
        else {
            return false;
        };

        let distance = self.speed * elapsed_ms as f64 / FRAME_MS as f64;
        self.offset = if distance <= 0.0 && elapsed_ms > 0 {
            // Degenerate layout (zero lift height): finish immediately.
            target_offset
        } else {
            match direction {
                Direction::Up => (self.offset - distance).max(target_offset),
                Direction::Down => (self.offset + distance).min(target_offset),
            }
        };

        if self.offset != target_offset {
            return true;
        }

        match direction {
            Direction::Up => self.phase = LiftPhase::Lifted { lane },
            Direction::Down => self.reset(),
        }
        false
    }

    /// Rescale offsets to a new layout, keeping lane and direction.
    pub fn on_resize(&mut self, layout: &BoardLayout) {
        let new_lift = layout.lift_offset();
        if self.lift_offset > 0.0 {
            self.offset *= new_lift / self.lift_offset;
        } else if let LiftPhase::Lifted { .. } = self.phase {
            self.offset = -new_lift;
        }
        self.lift_offset = new_lift;
        self.speed = new_lift / LIFT_FRAMES;

        match &mut self.phase {
            LiftPhase::Animating {
                direction: Direction::Up,
                target_offset,
                ..
            } => *target_offset = -new_lift,
            LiftPhase::Lifted { .. } => self.offset = -new_lift,
            _ => {}
        }
    }
}
