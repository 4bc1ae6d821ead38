//! Comparator trait shared by the heap primitives and the priority queue
//!
//! Every heap operation in this crate is driven by a [`Compare`] value rather
//! than by `Ord` on the element type. This lets the same array-backed heap hold
//! plain integers, search nodes ranked by `g + h`, or planner states ranked by a
//! key that depends on the goal and the heuristic in use.
//!
//! `precedes(a, b)` answers "does `a` belong above `b`?". The element that no
//! other element precedes sits at the top:
//!
//! - [`Less`] puts the minimum on top (min-heap)
//! - [`Greater`] puts the maximum on top (max-heap)
//! - any `Fn(&T, &T) -> bool` closure works as well
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::traits::{Compare, Greater, Less};
//!
//! assert!(Less.precedes(&1, &2));
//! assert!(Greater.precedes(&2, &1));
//!
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(by_len.precedes(&"ab", &"abc"));
//! ```

/// A strict weak ordering over `T`
///
/// Implementations must be irreflexive (`precedes(a, a)` is false) and
/// transitive. Ties are allowed; the heap breaks them by position.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` belongs above `b` in the heap
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders by `<`; the smallest element is on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders by `>`; the largest element is on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
