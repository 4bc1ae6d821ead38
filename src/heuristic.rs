//! Named distance estimates between grid cells
//!
//! The registry maps a name to a plain function pointer. It is built once and
//! then only read; pick the heuristic by name when constructing a planner.
//!
//! | Name          | Estimate                       |
//! |---------------|--------------------------------|
//! | `"manhattan"` | `max(|dx|, |dy|)` (Chebyshev)  |
//! | `"euclidean"` | `round(sqrt(dx² + dy²))`       |
//!
//! `"manhattan"` is the Chebyshev distance despite its name: it counts
//! 8-connected unit moves, which keeps it admissible on this grid.

use rustc_hash::FxHashMap;

use crate::coordinate::Coordinate;
use crate::error::{PlanningError, Result};

/// Estimate of the cost between `from` and `goal`
pub type HeuristicFn = fn(Coordinate, Coordinate) -> i32;

/// Chebyshev distance, saturating at `i32::MAX`
pub fn chebyshev(from: Coordinate, goal: Coordinate) -> i32 {
    let (dx, dy) = deltas(from, goal);
    i32::try_from(dx.max(dy)).unwrap_or(i32::MAX)
}

/// Straight-line distance rounded half away from zero, saturating at `i32::MAX`
pub fn euclidean(from: Coordinate, goal: Coordinate) -> i32 {
    let (dx, dy) = deltas(from, goal);
    // float-to-int `as` saturates
    (dx as f64).hypot(dy as f64).round() as i32
}

/// `(|dx|, |dy|)` widened so opposite ends of the `i32` range cannot overflow
fn deltas(from: Coordinate, goal: Coordinate) -> (i64, i64) {
    let dx = (i64::from(goal.x) - i64::from(from.x)).abs();
    let dy = (i64::from(goal.y) - i64::from(from.y)).abs();
    (dx, dy)
}

/// Read-only lookup of heuristics by name
#[derive(Debug, Clone)]
pub struct Heuristics {
    funcs: FxHashMap<String, HeuristicFn>,
}

impl Heuristics {
    /// Registry holding `"manhattan"` and `"euclidean"`
    pub fn new() -> Self {
        Self {
            funcs: FxHashMap::default(),
        }
        .with("manhattan", chebyshev)
        .with("euclidean", euclidean)
    }

    /// Adds or replaces `name`, consuming the registry
    pub fn with(mut self, name: impl Into<String>, func: HeuristicFn) -> Self {
        self.funcs.insert(name.into(), func);
        self
    }

    /// Looks up a heuristic
    ///
    /// # Errors
    /// Returns [`PlanningError::UnknownHeuristic`] if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<HeuristicFn> {
        self.funcs.get(name).copied().ok_or_else(|| {
            tracing::warn!(name, "heuristic lookup failed");
            PlanningError::UnknownHeuristic(name.to_owned())
        })
    }

    /// Returns true if `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::new()
    }
}
