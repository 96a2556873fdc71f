//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a framebuffer that is flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw round balls with half-block pixels (two per cell)
//! - Share one unit space with `core` so clicks hit what is drawn

pub mod buttons;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_ballsort_core as core;
pub use tui_ballsort_types as types;

pub use buttons::{hit_button, scene_buttons, Button};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{cell_to_units, viewport_units, GameView, Theme, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
