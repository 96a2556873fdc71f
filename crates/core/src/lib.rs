//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules, the lift/drop state machine and the
//! layout math. It has **no dependencies** on terminals, input devices or
//! I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same boards
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any front end that can report clicks and sizes can drive it
//!
//! # Module Structure
//!
//! - [`board`]: lanes of slots, generation (shuffle + compaction), moves, clear check
//! - [`lift`]: lift/drop state machine and frame-driven animation
//! - [`geometry`]: stage/lane rectangles, slot circles, anchored positioning
//! - [`game_state`]: one puzzle round (board + lift + layout)
//! - [`session`]: title/game/end scene flow
//! - [`rng`]: seeded LCG used for generation
//!
//! # Example
//!
//! ```
//! use tui_ballsort_core::{Board, ClickOutcome, GameState, GeometryConfig};
//! use tui_ballsort_core::types::{Ball, BLUE, RED};
//!
//! let red = Some(Ball::new(RED));
//! let blue = Some(Ball::new(BLUE));
//! let board = Board::from_lanes(vec![
//!     vec![red, blue],
//!     vec![blue, None],
//!     vec![red, None],
//! ])
//! .unwrap();
//!
//! let mut game = GameState::new(board, (1000.0, 800.0), GeometryConfig::PIXELS);
//! game.click_lane(0).unwrap(); // lift the blue ball
//! let outcome = game.click_lane(1).unwrap(); // drop it onto the other blue
//! assert!(matches!(outcome, ClickOutcome::Moved(_)));
//! assert!(game.is_clear());
//! ```
//!
//! # Timing
//!
//! Animations advance cooperatively: call [`GameState::tick`] once per frame
//! with the elapsed milliseconds. A lift takes ten 16ms frames.

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod lift;
pub mod rng;
pub mod session;

pub use tui_ballsort_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Lane, Move};
pub use game_state::GameState;
pub use geometry::{
    compute_slot_centers, layout, position, Anchor, BoardLayout, GeometryConfig, Rect, SlotCircle,
};
pub use lift::{ClickOutcome, Direction, LiftController, LiftPhase, LiftState};
pub use rng::SimpleRng;
pub use session::{Scene, Session};
