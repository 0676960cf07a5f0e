use std::collections::VecDeque;

use crate::config::{INITIAL_BODY, INITIAL_DIRECTION};
use crate::grid::{Position, contains};
use crate::input::{Direction, direction_change_is_valid};

/// Mutable snake state: body cells (front is head), heading, and one-shot growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    last_step: Direction,
    grow: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the canonical three-cell snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self::from_segments(INITIAL_BODY.to_vec(), INITIAL_DIRECTION)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            last_step: direction,
            grow: false,
        }
    }

    /// Moves one cell along the current direction.
    ///
    /// With growth pending the tail is kept and the flag is consumed;
    /// otherwise the tail cell is dropped so the length is unchanged.
    pub fn update(&mut self) {
        let next_head = self.head().stepped(self.direction);

        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
        self.body.push_front(next_head);
        self.last_step = self.direction;
    }

    /// Queues growth on the next movement tick. Repeated calls do not stack.
    pub fn request_growth(&mut self) {
        self.grow = true;
    }

    /// Restores the spawn layout and heading, dropping pending growth.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.last_step = INITIAL_DIRECTION;
        self.grow = false;
    }

    /// Stores `direction` for the next step unless it reverses the snake.
    ///
    /// Both the stored direction and the heading of the last completed step
    /// are checked, so two quick turns inside one tick cannot fold the head
    /// back onto the neck. Returns whether the request was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction)
            || !direction_change_is_valid(self.last_step, direction)
        {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        contains(&self.body, position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        contains(self.body.iter().skip(1), self.head())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction the next step will take.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn growth_pending(&self) -> bool {
        self.grow
    }

    #[must_use]
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> {
        self.body.iter()
    }
}
