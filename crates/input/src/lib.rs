//! Terminal input module (game-loop facing).
//!
//! This module is intentionally independent of any rendering. It maps
//! `crossterm` events into [`crate::types::InputEvent`] and batches them so
//! the game loop can drain one bounded list per frame.

pub mod handler;
pub mod map;

pub use tui_ballsort_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_event, should_quit};
