//! Standard library compatibility layer
//!
//! Aliases and trait impls that make [`PriorityQueue`] usable like
//! `std::collections::BinaryHeap` when the element type is `Ord`.
//!
//! # Differences from BinaryHeap
//!
//! - **Two flavours**: [`MinQueue`] pops the smallest element first,
//!   [`MaxQueue`] the largest. `BinaryHeap` is always a max-heap.
//! - **Errors on empty**: `top`/`pop` return `Err(EmptyQueue)`; use
//!   `peek`/`try_pop` for the `Option` API.
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::stdlib_compat::{MaxQueue, MinQueue};
//!
//! let mut min: MinQueue<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(min.try_pop(), Some(3));
//!
//! let mut max = MaxQueue::default();
//! max.extend([5, 3, 7]);
//! assert_eq!(max.try_pop(), Some(7));
//! ```

use crate::priority_queue::PriorityQueue;
use crate::traits::{Compare, Greater, Less};

/// Queue that pops the smallest element first
pub type MinQueue<T> = PriorityQueue<T, Less>;

/// Queue that pops the largest element first
pub type MaxQueue<T> = PriorityQueue<T, Greater>;

impl<T, C: Compare<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}
