//! TUI Ball Sort (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `tui_ballsort::{core,input,term,types}` and holds the runner's
//! configuration, logging setup and event dispatch.

pub mod config;
pub mod logging;
pub mod runner;

pub use tui_ballsort_core as core;
pub use tui_ballsort_input as input;
pub use tui_ballsort_term as term;
pub use tui_ballsort_types as types;
