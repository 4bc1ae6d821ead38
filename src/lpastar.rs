//! Lifelong Planning A* state model
//!
//! This module binds the pieces an LPA* planner works with: a [`Matrix`] of
//! cell states, a goal, a heuristic picked by name, and a [`PriorityQueue`]
//! of states ordered by their [`Key`]. It does not run the planning loop;
//! a driver edits the matrix and pushes and pops states through
//! [`LpAstarCore`].
//!
//! # Keys
//!
//! A state's key is `(min(g, r + h), min(g, r))`, compared lexicographically.
//! The queue keeps the smallest key on top.
//!
//! # Stale entries
//!
//! The queue holds copies. Once a cell changes in the matrix, any copy of it
//! already queued carries an out-of-date key, and there may be several copies
//! of the same cell. A driver must compare a popped state against the live
//! cell before acting on it.
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::coordinate::Coordinate;
//! use lifelong_planning::lpastar::{Key, LpAstarCore};
//!
//! let goal = Coordinate::new(3, 3);
//! let mut core = LpAstarCore::new(5, 5, goal, "manhattan").unwrap();
//!
//! let start = Coordinate::new(0, 0);
//! core.matrix_mut()[start].r = 0;
//! core.enqueue(start).unwrap();
//!
//! let top = core.queue_mut().pop().unwrap();
//! assert_eq!(top.coordinate, start);
//! assert_eq!(core.key(&top), Key::new(3, 0));
//! ```

use crate::config::SearchConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::heuristic::{HeuristicFn, Heuristics};
use crate::matrix::{LpState, Matrix};
use crate::priority_queue::PriorityQueue;
use crate::traits::Compare;

/// Two-part priority, smaller is more urgent
///
/// Field order gives the derived `Ord` its lexicographic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    pub first: i32,
    pub second: i32,
}

impl Key {
    /// Creates a key from its two parts
    pub const fn new(first: i32, second: i32) -> Self {
        Self { first, second }
    }

    /// `(min(g, r + h(coordinate, goal)), min(g, r))`
    ///
    /// `r + h` saturates, so an unreached state keeps an infinite first part.
    pub fn calculate(state: &LpState, h: HeuristicFn, goal: Coordinate) -> Self {
        let estimate = state.r.saturating_add(h(state.coordinate, goal));
        Self::new(state.g.min(estimate), state.g.min(state.r))
    }
}

/// Orders states by key, smallest on top
///
/// Keys are recomputed on every comparison; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct KeyOrder {
    h: HeuristicFn,
    goal: Coordinate,
}

impl KeyOrder {
    /// Creates an ordering for `goal` under heuristic `h`
    pub fn new(h: HeuristicFn, goal: Coordinate) -> Self {
        Self { h, goal }
    }

    /// Key of `state` under this ordering
    pub fn key(&self, state: &LpState) -> Key {
        Key::calculate(state, self.h, self.goal)
    }
}

impl Compare<LpState> for KeyOrder {
    fn precedes(&self, a: &LpState, b: &LpState) -> bool {
        self.key(a) < self.key(b)
    }
}

/// Open set of an LPA* planner
pub type StateQueue = PriorityQueue<LpState, KeyOrder>;

/// Everything an LPA* planning loop needs, bound to one goal and heuristic
#[derive(Debug, Clone)]
pub struct LpAstarCore {
    heuristics: Heuristics,
    heuristic_name: String,
    h: HeuristicFn,
    goal: Coordinate,
    matrix: Matrix,
    queue: StateQueue,
}

impl LpAstarCore {
    /// Builds the aggregate for a `height` by `width` grid
    ///
    /// # Errors
    /// Returns [`PlanningError::UnknownHeuristic`](crate::error::PlanningError::UnknownHeuristic)
    /// if `heuristic` is not registered, or
    /// [`PlanningError::GridTooLarge`](crate::error::PlanningError::GridTooLarge)
    /// if the extents cannot be addressed. Both are checked before the grid or
    /// the queue is allocated.
    pub fn new(height: usize, width: usize, goal: Coordinate, heuristic: &str) -> Result<Self> {
        let heuristics = Heuristics::new();
        let h = heuristics.get(heuristic)?;
        Matrix::check_extents(height, width)?;

        tracing::debug!(height, width, %goal, heuristic, "building LPA* core");

        let matrix = Matrix::new(height, width)?;
        Ok(Self {
            heuristics,
            heuristic_name: heuristic.to_owned(),
            h,
            goal,
            matrix,
            queue: PriorityQueue::new(KeyOrder::new(h, goal)),
        })
    }

    /// Builds the aggregate from a loaded configuration
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::new(config.height, config.width, config.goal, &config.heuristic)
    }

    /// Returns the goal cell
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// The resolved heuristic function
    pub fn heuristic(&self) -> HeuristicFn {
        self.h
    }

    /// Returns the name the heuristic was resolved from
    pub fn heuristic_name(&self) -> &str {
        &self.heuristic_name
    }

    /// Returns the heuristic registry
    pub fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    /// Returns the state grid
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the state grid mutably
    pub fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }

    /// Returns the open set
    pub fn queue(&self) -> &StateQueue {
        &self.queue
    }

    /// Returns the open set mutably
    pub fn queue_mut(&mut self) -> &mut StateQueue {
        &mut self.queue
    }

    /// Borrows the grid and the queue at the same time
    pub fn parts_mut(&mut self) -> (&mut Matrix, &mut StateQueue) {
        (&mut self.matrix, &mut self.queue)
    }

    /// Key of `state` against this goal and heuristic
    pub fn key(&self, state: &LpState) -> Key {
        Key::calculate(state, self.h, self.goal)
    }

    /// Key of the live cell at `c`
    ///
    /// # Errors
    /// Returns [`PlanningError::OutOfRange`](crate::error::PlanningError::OutOfRange)
    /// outside the grid.
    pub fn key_at(&self, c: Coordinate) -> Result<Key> {
        let state = self.matrix.get(c)?;
        Ok(self.key(state))
    }

    /// Pushes a copy of the live cell at `c` onto the queue
    ///
    /// # Errors
    /// Returns [`PlanningError::OutOfRange`](crate::error::PlanningError::OutOfRange)
    /// outside the grid.
    pub fn enqueue(&mut self, c: Coordinate) -> Result<()> {
        let state = *self.matrix.get(c)?;
        self.queue.push(state);
        Ok(())
    }
}
