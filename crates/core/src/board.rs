//! Board module - lanes of slots holding colored balls
//!
//! The board is a sequence of lanes, every lane holding exactly `circle_num`
//! slots ordered from the base (index 0) to the open top. Lanes are always
//! compacted: occupied slots form a prefix, empty slots sit above them.
//!
//! Moves only relocate balls, so the number of balls of each color never
//! changes after generation.

use tracing::{debug, warn};

use crate::rng::SimpleRng;
use crate::types::{Ball, Color, IllegalMoveReason, PuzzleError, Slot, SlotRef};

/// One fixed-capacity column of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    slots: Vec<Slot>,
}

impl Lane {
    /// A lane completely filled with one color
    pub fn filled(color: Color, capacity: usize) -> Self {
        Self {
            slots: vec![Some(Ball::new(color)); capacity],
        }
    }

    /// A lane with no balls
    pub fn empty(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<Slot> {
        self.slots.get(slot).copied()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Index of the topmost occupied slot, scanning down from the open top
    pub fn top_index(&self) -> Option<usize> {
        self.slots.iter().rposition(|s| s.is_some())
    }

    /// The topmost ball, if any
    pub fn top(&self) -> Option<Ball> {
        self.top_index().and_then(|i| self.slots[i])
    }

    /// Index of the first empty slot from the base
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Remove the topmost ball. Returns the ball and the slot it left.
    fn pop_top(&mut self) -> Option<(Ball, usize)> {
        let idx = self.top_index()?;
        self.slots[idx].take().map(|ball| (ball, idx))
    }

    /// Put a ball into the first empty slot. Returns the slot it landed in.
    fn push(&mut self, ball: Ball) -> Option<usize> {
        let idx = self.first_empty()?;
        self.slots[idx] = Some(ball);
        Some(idx)
    }

    /// Move occupied slots below empty ones, keeping their relative order
    pub fn compact(&mut self) {
        let mut write = 0;
        for read in 0..self.slots.len() {
            if self.slots[read].is_some() {
                self.slots.swap(write, read);
                write += 1;
            }
        }
    }

    /// True when no empty slot sits below an occupied one
    pub fn is_compacted(&self) -> bool {
        match self.first_empty() {
            Some(first_empty) => self.slots[first_empty..].iter().all(|s| s.is_none()),
            None => true,
        }
    }

    /// True when every ball in the lane has the same color (vacuously for empty lanes)
    pub fn is_monochrome(&self) -> bool {
        let mut colors = self.slots.iter().flatten().map(|b| b.color);
        match colors.next() {
            Some(first) => colors.all(|c| c == first),
            None => true,
        }
    }
}

/// A completed move, as applied by [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub ball: Ball,
    /// Slot the ball was removed from
    pub origin: SlotRef,
    /// Slot the ball landed in
    pub destination: SlotRef,
}

/// The puzzle board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    lanes: Vec<Lane>,
    circle_num: usize,
}

impl Board {
    /// Generate a shuffled board.
    ///
    /// Builds `lane_num - 1` full lanes of distinct colors drawn from
    /// `palette` plus one empty overflow lane, shuffles every slot of the
    /// board (empties included) and compacts each lane. Solvability is not
    /// checked.
    pub fn generate(
        circle_num: usize,
        lane_num: usize,
        palette: &[Color],
        rng: &mut SimpleRng,
    ) -> Result<Self, PuzzleError> {
        if lane_num < 2 {
            return Err(PuzzleError::InvalidShape("at least two lanes are required"));
        }
        if circle_num < 1 {
            return Err(PuzzleError::InvalidShape("lanes need at least one slot"));
        }

        let mut distinct: Vec<Color> = Vec::with_capacity(palette.len());
        for color in palette {
            if !distinct.contains(color) {
                distinct.push(*color);
            }
        }

        let color_lanes = lane_num - 1;
        if distinct.len() < color_lanes {
            warn!(
                requested = color_lanes,
                available = distinct.len(),
                "palette too small for board"
            );
            return Err(PuzzleError::InsufficientColors {
                requested: color_lanes,
                available: distinct.len(),
            });
        }

        let mut lanes: Vec<Lane> = rng
            .sample_indices(distinct.len(), color_lanes)
            .into_iter()
            .map(|i| Lane::filled(distinct[i], circle_num))
            .collect();
        lanes.push(Lane::empty(circle_num));

        let mut board = Self { lanes, circle_num };
        board.shuffle(rng);
        board.compact();

        debug!(circle_num, lane_num, "generated board");
        Ok(board)
    }

    /// Build a board from explicit lane contents.
    ///
    /// Every lane must have the same non-zero length and be compacted.
    pub fn from_lanes(lanes: Vec<Vec<Slot>>) -> Result<Self, PuzzleError> {
        let circle_num = match lanes.first() {
            Some(first) => first.len(),
            None => return Err(PuzzleError::InvalidShape("board has no lanes")),
        };
        if circle_num == 0 {
            return Err(PuzzleError::InvalidShape("lanes need at least one slot"));
        }
        if lanes.iter().any(|l| l.len() != circle_num) {
            return Err(PuzzleError::InvalidShape("lanes differ in length"));
        }

        let lanes: Vec<Lane> = lanes.into_iter().map(|slots| Lane { slots }).collect();
        if let Some(lane) = lanes.iter().position(|l| !l.is_compacted()) {
            return Err(PuzzleError::NotCompacted { lane });
        }

        Ok(Self { lanes, circle_num })
    }

    /// Permute all slots of the board uniformly, keeping each lane's length.
    fn shuffle(&mut self, rng: &mut SimpleRng) {
        let mut flat: Vec<Slot> = self
            .lanes
            .iter()
            .flat_map(|l| l.slots.iter().copied())
            .collect();
        rng.shuffle(&mut flat);

        for (lane, chunk) in self.lanes.iter_mut().zip(flat.chunks(self.circle_num)) {
            lane.slots.copy_from_slice(chunk);
        }
    }

    fn compact(&mut self) {
        for lane in &mut self.lanes {
            lane.compact();
        }
    }

    pub fn lane_num(&self) -> usize {
        self.lanes.len()
    }

    /// Slots per lane
    pub fn circle_num(&self) -> usize {
        self.circle_num
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, lane: usize) -> Option<&Lane> {
        self.lanes.get(lane)
    }

    /// Slot contents at a board position; `None` when out of range
    pub fn get(&self, at: SlotRef) -> Option<Slot> {
        self.lanes.get(at.lane).and_then(|l| l.get(at.slot))
    }

    /// Total number of balls on the board
    pub fn ball_count(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Number of balls of one color
    pub fn color_count(&self, color: Color) -> usize {
        self.lanes
            .iter()
            .flat_map(|l| l.slots.iter().flatten())
            .filter(|b| b.color == color)
            .count()
    }

    pub fn is_compacted(&self) -> bool {
        self.lanes.iter().all(Lane::is_compacted)
    }

    /// A lane can be lifted from when it holds at least one ball
    pub fn is_legal_lift(&self, lane: usize) -> bool {
        self.lanes.get(lane).is_some_and(|l| !l.is_empty())
    }

    /// A drop is legal into a lane with room, or back onto the same lane (cancel)
    pub fn is_legal_drop(&self, from: usize, to: usize) -> bool {
        if from >= self.lanes.len() {
            return false;
        }
        if from == to {
            return true;
        }
        self.lanes.get(to).is_some_and(|l| !l.is_full())
    }

    /// Topmost occupied slot of a lane
    pub fn topmost_occupied(&self, lane: usize) -> Option<SlotRef> {
        self.lanes
            .get(lane)
            .and_then(Lane::top_index)
            .map(|slot| SlotRef::new(lane, slot))
    }

    fn check_move(&self, from: usize, to: usize) -> Result<(), IllegalMoveReason> {
        if from >= self.lanes.len() || to >= self.lanes.len() {
            return Err(IllegalMoveReason::OutOfRange);
        }
        if from == to {
            return Err(IllegalMoveReason::SameLane);
        }
        if !self.is_legal_lift(from) {
            return Err(IllegalMoveReason::SourceEmpty);
        }
        if !self.is_legal_drop(from, to) {
            return Err(IllegalMoveReason::DestinationFull);
        }
        Ok(())
    }

    /// Move the topmost ball of `from` into the first empty slot of `to`.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<Move, PuzzleError> {
        if let Err(reason) = self.check_move(from, to) {
            return Err(PuzzleError::IllegalMove { from, to, reason });
        }

        let (ball, origin) = self.lanes[from].pop_top().ok_or(PuzzleError::IllegalMove {
            from,
            to,
            reason: IllegalMoveReason::SourceEmpty,
        })?;
        let Some(destination) = self.lanes[to].push(ball) else {
            // Unreachable after check_move; restore the source lane regardless.
            self.lanes[from].slots[origin] = Some(ball);
            return Err(PuzzleError::IllegalMove {
                from,
                to,
                reason: IllegalMoveReason::DestinationFull,
            });
        };

        Ok(Move {
            from,
            to,
            ball,
            origin: SlotRef::new(from, origin),
            destination: SlotRef::new(to, destination),
        })
    }

    /// Every lane holding balls holds a single color
    pub fn is_clear(&self) -> bool {
        self.lanes.iter().all(Lane::is_monochrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLUE, GREEN, RED};

    fn r() -> Slot {
        Some(Ball::new(RED))
    }

    fn b() -> Slot {
        Some(Ball::new(BLUE))
    }

    #[test]
    fn test_lane_compact_keeps_ball_order() {
        let mut lane = Lane {
            slots: vec![None, r(), None, b(), r()],
        };
        assert!(!lane.is_compacted());

        lane.compact();
        assert_eq!(lane.slots(), &[r(), b(), r(), None, None]);
        assert!(lane.is_compacted());
    }

    #[test]
    fn test_lane_top_and_first_empty() {
        let lane = Lane {
            slots: vec![r(), b(), None],
        };
        assert_eq!(lane.top_index(), Some(1));
        assert_eq!(lane.top(), b());
        assert_eq!(lane.first_empty(), Some(2));
        assert_eq!(lane.len(), 2);
        assert!(!lane.is_full());
        assert!(!lane.is_empty());
    }

    #[test]
    fn test_lane_monochrome() {
        assert!(Lane::empty(3).is_monochrome());
        assert!(Lane::filled(GREEN, 3).is_monochrome());
        let mixed = Lane {
            slots: vec![r(), b(), None],
        };
        assert!(!mixed.is_monochrome());
    }

    #[test]
    fn test_generate_rejects_bad_shapes() {
        let mut rng = SimpleRng::new(1);
        assert!(matches!(
            Board::generate(3, 1, &[RED], &mut rng),
            Err(PuzzleError::InvalidShape(_))
        ));
        assert!(matches!(
            Board::generate(0, 3, &[RED, BLUE], &mut rng),
            Err(PuzzleError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_generate_counts_distinct_palette_colors() {
        let mut rng = SimpleRng::new(1);
        let err = Board::generate(3, 3, &[RED, RED, RED], &mut rng).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::InsufficientColors {
                requested: 2,
                available: 1
            }
        );
    }

    #[test]
    fn test_shuffle_preserves_lane_lengths() {
        let mut rng = SimpleRng::new(42);
        let mut board = Board {
            lanes: vec![Lane::filled(RED, 4), Lane::filled(BLUE, 4), Lane::empty(4)],
            circle_num: 4,
        };
        board.shuffle(&mut rng);
        assert!(board.lanes.iter().all(|l| l.capacity() == 4));
        assert_eq!(board.color_count(RED), 4);
        assert_eq!(board.color_count(BLUE), 4);
    }

    #[test]
    fn test_failed_move_restores_nothing_changed() {
        let mut board = Board::from_lanes(vec![vec![r(), r()], vec![b(), b()]]).unwrap();
        let before = board.clone();
        assert!(board.apply_move(0, 1).is_err());
        assert_eq!(board, before);
    }
}
