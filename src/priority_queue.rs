//! Owning priority queue over the heap primitives
//!
//! [`PriorityQueue`] pairs a `Vec<T>` with a [`Compare`] value and keeps the
//! vector heap-ordered through the functions in [`heap`](crate::heap).
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `from_vec`         | O(n)       |
//! | `push`             | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `top`              | O(1)       |
//! | `len` / `is_empty` | O(1)       |
//!
//! # Priorities are fixed at push time
//!
//! There is no `decrease_key` and no way to reach an element once it is
//! inside. If the data an element's priority was computed from changes, push
//! a fresh copy and treat the old one as stale when it surfaces: check it
//! against the live source before acting on it.
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::priority_queue::PriorityQueue;
//! use lifelong_planning::traits::Less;
//!
//! let mut pq = PriorityQueue::from_vec(vec![4, 6, 7, 1], Less);
//! assert_eq!(pq.len(), 4);
//! assert_eq!(*pq.top().unwrap(), 1);
//! assert_eq!(pq.pop().unwrap(), 1);
//! assert_eq!(pq.pop().unwrap(), 4);
//! ```

use std::fmt;

use crate::error::{PlanningError, Result};
use crate::heap;
use crate::traits::Compare;

/// A binary heap ordered by an injected comparator
///
/// The top is the element that no other resident precedes under `C`.
#[derive(Clone)]
pub struct PriorityQueue<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates an empty queue
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Takes ownership of `data` and heap-orders it in O(n)
    pub fn from_vec(mut data: Vec<T>, cmp: C) -> Self {
        heap::build_heap(&mut data, &cmp);
        tracing::trace!(len = data.len(), "built heap from vector");
        Self { data, cmp }
    }

    /// Collects `items` and heap-orders them in O(n)
    pub fn from_iter_with<I>(items: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(items.into_iter().collect(), cmp)
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        heap::push_heap(&mut self.data, item, &self.cmp);
    }

    /// Returns the top element without removing it
    ///
    /// # Errors
    /// Returns [`PlanningError::EmptyQueue`] if the queue is empty.
    pub fn top(&self) -> Result<&T> {
        self.data.first().ok_or(PlanningError::EmptyQueue)
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`PlanningError::EmptyQueue`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.try_pop().ok_or(PlanningError::EmptyQueue)
    }

    /// Like [`top`](Self::top), but `None` when empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Like [`pop`](Self::pop), but `None` when empty
    pub fn try_pop(&mut self) -> Option<T> {
        heap::pop_heap(&mut self.data, &self.cmp)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Consumes the queue and returns the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
