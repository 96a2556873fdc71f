//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input mapping).
//!
//! # Board Vocabulary
//!
//! - **Lane**: a fixed-capacity vertical column of slots
//! - **Slot**: one position in a lane, either empty or holding one [`Ball`]
//! - **Lift**: picking up the topmost ball of a lane, pending a drop elsewhere
//! - **Drop**: moving the lifted ball into another lane's first empty slot
//!
//! Slots within a lane are ordered from the base (index 0) to the open top.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | One animation frame (~60 FPS) |
//! | `LIFT_FRAMES` | 10 | Frames a lift or cancel animation takes |
//! | `DEFAULT_FPS` | 60 | Default frame rate of the terminal loop |
//!
//! # Difficulty Ranges
//!
//! | Difficulty | Balls per lane | Lanes |
//! |------------|----------------|-------|
//! | Easy | 3..=6 | 3..=5 |
//! | Normal | 5..=9 | 6..=8 |
//! | Hard | 7..=11 | 9..=11 |
//!
//! # Examples
//!
//! ```
//! use tui_ballsort_types::{Ball, Difficulty, RED};
//!
//! let ball = Ball::new(RED);
//! assert_eq!(ball.color, RED);
//!
//! let difficulty = Difficulty::from_str("normal").unwrap();
//! assert_eq!(difficulty, Difficulty::Normal);
//! assert_eq!(difficulty.lane_range(), 6..=8);
//! ```

use std::ops::RangeInclusive;

use thiserror::Error;

/// One animation frame in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Number of frames a lift or cancel animation takes at the default speed
pub const LIFT_FRAMES: f64 = 10.0;

/// Default frame rate of the terminal loop
pub const DEFAULT_FPS: u32 = 60;

/// Maximum number of input events drained in a single frame
pub const MAX_FRAME_EVENTS: usize = 32;

/// 24-bit ball color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const ORANGE: Color = Color::new(255, 165, 0);
pub const PURPLE: Color = Color::new(160, 32, 240);
pub const PINK: Color = Color::new(255, 192, 203);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const BROWN: Color = Color::new(165, 42, 42);

/// Default ball palette.
///
/// Ten colors cover the largest hard board (11 lanes, one of them empty).
pub const DEFAULT_PALETTE: [Color; 10] = [
    RED, GREEN, BLUE, YELLOW, ORANGE, PURPLE, PINK, CYAN, MAGENTA, BROWN,
];

/// A single ball. Balls of the same color are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub color: Color,
}

impl Ball {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// A slot in a lane
///
/// - `None`: empty slot
/// - `Some(Ball)`: occupied slot
pub type Slot = Option<Ball>;

/// Position of a slot on the board (lane index, slot index from the base).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub lane: usize,
    pub slot: usize,
}

impl SlotRef {
    pub const fn new(lane: usize, slot: usize) -> Self {
        Self { lane, slot }
    }
}

/// Difficulty selector; only affects the random board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Balls per lane drawn for a new board.
    pub fn circle_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 3..=6,
            Difficulty::Normal => 5..=9,
            Difficulty::Hard => 7..=11,
        }
    }

    /// Lane count (including the empty overflow lane) drawn for a new board.
    pub fn lane_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 3..=5,
            Difficulty::Normal => 6..=8,
            Difficulty::Hard => 9..=11,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_ballsort_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("impossible"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Human readable label used on buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// UI-level actions, produced by buttons and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Choose the difficulty on the title screen
    SelectDifficulty(Difficulty),
    /// Leave the title screen and start a round
    Start,
    /// Throw the current board away and generate a new one
    Regenerate,
    /// Start another round from the end screen
    Retry,
    /// Return to the title screen
    BackToTitle,
    /// Exit the program
    Quit,
}

/// Discrete input events drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Terminal resized to `width` columns by `height` rows
    Resize { width: u16, height: u16 },
    /// Primary button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Keyboard shortcut
    Action(UiAction),
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("source and destination are the same lane")]
    SameLane,
    #[error("source lane is empty")]
    SourceEmpty,
    #[error("destination lane is full")]
    DestinationFull,
    #[error("lane index out of range")]
    OutOfRange,
}

/// Errors reported by board generation and move application.
///
/// All of them are fatal to the single call that produced them only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("palette has {available} distinct colors but {requested} are needed")]
    InsufficientColors { requested: usize, available: usize },
    #[error("illegal move from lane {from} to lane {to}: {reason}")]
    IllegalMove {
        from: usize,
        to: usize,
        reason: IllegalMoveReason,
    },
    #[error("invalid board shape: {0}")]
    InvalidShape(&'static str),
    #[error("lane {lane} has an empty slot below an occupied one")]
    NotCompacted { lane: usize },
}
