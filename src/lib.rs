//! Comparator-driven binary heap and Lifelong Planning A* state model
//!
//! This crate provides an array-backed binary heap whose order comes from an
//! injected comparator, and the data model an incremental LPA* planner builds
//! on top of it.
//!
//! # Features
//!
//! - **Heap primitives** ([`heap`]): `parent`/`left_child`/`right_child`,
//!   `heapify`, `build_heap`, `sift_up` over any `&mut [T]`
//! - **Priority queue** ([`priority_queue`]): owning wrapper with O(n) bulk
//!   construction and O(log n) `push`/`pop`
//! - **Grid model** ([`coordinate`], [`matrix`]): 8-connected coordinates and a
//!   dense grid of `g`/`rhs` cell state
//! - **Heuristics** ([`heuristic`]): named distance estimates
//! - **LPA* core** ([`lpastar`]): lexicographic keys and an aggregate binding
//!   grid, goal, heuristic, and open set
//!
//! The planning loop itself (`ComputeShortestPath`/`UpdateVertex`) is left to
//! the caller.
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::priority_queue::PriorityQueue;
//! use lifelong_planning::traits::Less;
//!
//! let mut pq = PriorityQueue::new(Less);
//! pq.push(5);
//! pq.push(3);
//! pq.push(8);
//! assert_eq!(pq.pop().unwrap(), 3);
//! assert_eq!(*pq.top().unwrap(), 5);
//! ```

pub mod config;
pub mod coordinate;
pub mod error;
pub mod heap;
pub mod heuristic;
pub mod lpastar;
pub mod matrix;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use coordinate::{Coordinate, Direction};
pub use error::{PlanningError, Result};
pub use lpastar::{Key, LpAstarCore};
pub use matrix::{LpState, Matrix};
pub use priority_queue::PriorityQueue;
pub use traits::Compare;
