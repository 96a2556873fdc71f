//! Per-frame input batching.
//!
//! The game loop drains all pending terminal events once per frame. Events are
//! collected into a fixed-capacity batch; consecutive resizes collapse into
//! the latest one and anything past capacity is dropped.

use arrayvec::ArrayVec;
use crossterm::event::Event;

use crate::map::map_event;
use crate::types::{InputEvent, MAX_FRAME_EVENTS};

pub type FrameEvents = ArrayVec<InputEvent, MAX_FRAME_EVENTS>;

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: FrameEvents,
    dropped: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map and queue a raw terminal event. Returns false if it was not queued.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match map_event(event) {
            Some(ev) => self.push(ev),
            None => false,
        }
    }

    /// Queue an already-mapped event. Returns false when the batch is full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if let (InputEvent::Resize { .. }, Some(InputEvent::Resize { .. })) =
            (event, self.pending.last())
        {
            self.pending.pop();
        }

        if self.pending.try_push(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn is_full(&self) -> bool {
        self.pending.is_full()
    }

    /// Take this frame's events, leaving the batch empty.
    pub fn drain(&mut self) -> FrameEvents {
        std::mem::take(&mut self.pending)
    }

    /// Events dropped because a frame's batch overflowed.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
