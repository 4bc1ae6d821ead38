//! Grid coordinates and 8-connected moves
//!
//! Directions carry the single-character codes used to spell paths, laid out
//! around the current cell like a keypad with the centre removed:
//!
//! ```text
//!   1  2  3        (-1,-1) ( 0,-1) ( 1,-1)
//!   4     5        (-1, 0)         ( 1, 0)
//!   6  7  8        (-1, 1) ( 0, 1) ( 1, 1)
//! ```
//!
//! `y` grows downward. [`Coordinate::neighbours`] returns the eight offsets in
//! code order. Nothing here knows about grid extents. Moves saturate at the
//! edges of the `i32` range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, Result};

/// A cell position on a 2-D integer grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// One of the eight unit moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in code order `'1'..='8'`
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Parses a path code
    pub fn from_code(code: char) -> Option<Direction> {
        let idx = code.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(idx as usize).copied()
    }

    /// The path character for this move
    pub fn code(self) -> char {
        match self {
            Direction::UpLeft => '1',
            Direction::Up => '2',
            Direction::UpRight => '3',
            Direction::Left => '4',
            Direction::Right => '5',
            Direction::DownLeft => '6',
            Direction::Down => '7',
            Direction::DownRight => '8',
        }
    }

    /// `(dx, dy)` for this move
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

impl Coordinate {
    /// Creates a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one move away in `dir`, clamped to the `i32` range
    pub fn step(self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.offset();
        Coordinate::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Follows a path spelled in direction codes, starting here
    ///
    /// # Errors
    /// Returns [`PlanningError::InvalidDirection`] on the first character
    /// outside `'1'..='8'`.
    pub fn walk(self, path: &str) -> Result<Coordinate> {
        path.chars().try_fold(self, |at, code| {
            Direction::from_code(code)
                .map(|dir| at.step(dir))
                .ok_or(PlanningError::InvalidDirection(code))
        })
    }

    /// The eight surrounding cells in direction-code order
    pub fn neighbours(self) -> [Coordinate; 8] {
        Direction::ALL.map(|dir| self.step(dir))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}
