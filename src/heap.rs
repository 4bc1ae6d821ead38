//! Binary heap primitives over slices
//!
//! These free functions implement the array-backed binary heap used by
//! [`PriorityQueue`](crate::priority_queue::PriorityQueue). They work on any
//! `&mut [T]` and take the ordering as a [`Compare`] value, so callers can
//! heap-order a plain slice without owning a queue.
//!
//! Positions are slice-relative. The tree is laid out level by level:
//!
//! ```text
//!                 0
//!         1               2
//!     3       4       5       6
//!   7   8   9
//! ```
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `heapify`    | O(log n)   |
//! | `build_heap` | O(n)       |
//! | `sift_up`    | O(log n)   |
//! | `push_heap`  | O(log n)   |
//! | `pop_heap`   | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use lifelong_planning::heap::build_heap;
//! use lifelong_planning::traits::Greater;
//!
//! let mut seq = vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
//! build_heap(&mut seq, &Greater);
//! assert_eq!(seq, vec![16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
//! ```

use crate::traits::Compare;

/// Position of the parent of `i`
///
/// The root is its own parent, so `parent(0) == 0`. Callers moving elements
/// upward must stop at the root themselves.
#[inline]
pub fn parent(i: usize) -> usize {
    if i == 0 {
        0
    } else {
        (i - 1) / 2
    }
}

/// Position of the left child of `i` in a heap of `len` elements, if any
#[inline]
pub fn left_child(len: usize, i: usize) -> Option<usize> {
    let child = 2 * i + 1;
    (child < len).then_some(child)
}

/// Position of the right child of `i` in a heap of `len` elements, if any
#[inline]
pub fn right_child(len: usize, i: usize) -> Option<usize> {
    let child = 2 * i + 2;
    (child < len).then_some(child)
}

/// Sift the element at `i` down until neither child precedes it
///
/// Both subtrees under `i` must already be heap-ordered. A child replaces the
/// current pick only if it strictly precedes it, so on ties the element
/// closer to the root stays put and the left child wins over the right.
pub fn heapify<T, C>(seq: &mut [T], mut i: usize, cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    let len = seq.len();
    loop {
        let mut best = i;

        if let Some(left) = left_child(len, i) {
            if cmp.precedes(&seq[left], &seq[best]) {
                best = left;
            }
        }
        if let Some(right) = right_child(len, i) {
            if cmp.precedes(&seq[right], &seq[best]) {
                best = right;
            }
        }

        if best == i {
            break;
        }
        seq.swap(i, best);
        i = best;
    }
}

/// Heap-order the whole slice bottom-up
///
/// Runs [`heapify`] from the last internal node back to the root. The
/// bottom-up order is what makes the subtree precondition of `heapify` hold.
pub fn build_heap<T, C>(seq: &mut [T], cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    for i in (0..len / 2).rev() {
        heapify(seq, i, cmp);
    }
}

/// Move the element at `i` up while it strictly precedes its parent
pub fn sift_up<T, C>(seq: &mut [T], mut i: usize, cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    while i > 0 {
        let p = parent(i);
        if !cmp.precedes(&seq[i], &seq[p]) {
            break;
        }
        seq.swap(i, p);
        i = p;
    }
}

/// Append `item` to a heap-ordered vector and restore the order
pub fn push_heap<T, C>(heap: &mut Vec<T>, item: T, cmp: &C)
where
    C: Compare<T> + ?Sized,
{
    heap.push(item);
    let last = heap.len() - 1;
    sift_up(heap, last, cmp);
}

/// Remove and return the top of a heap-ordered vector
///
/// Swaps the root with the last element, shrinks by one, then repairs the
/// shorter heap from the root. Returns `None` on an empty vector.
pub fn pop_heap<T, C>(heap: &mut Vec<T>, cmp: &C) -> Option<T>
where
    C: Compare<T> + ?Sized,
{
    if heap.is_empty() {
        return None;
    }
    let last = heap.len() - 1;
    heap.swap(0, last);
    let top = heap.pop();
    heapify(heap, 0, cmp);
    top
}

/// Returns true if no child in `seq` precedes its parent
pub fn is_heap<T, C>(seq: &[T], cmp: &C) -> bool
where
    C: Compare<T> + ?Sized,
{
    (1..seq.len()).all(|i| !cmp.precedes(&seq[i], &seq[parent(i)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Greater, Less};

    #[test]
    fn test_parent() {
        assert_eq!(parent(0), 0);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn test_children() {
        assert_eq!(left_child(6, 0), Some(1));
        assert_eq!(right_child(6, 0), Some(2));
        assert_eq!(left_child(6, 2), Some(5));
        assert_eq!(right_child(6, 2), None);
        assert_eq!(left_child(6, 3), None);
    }

    #[test]
    fn test_heapify_from_root() {
        let mut seq = vec![5, 6, 9, 3, 2, 7];
        heapify(&mut seq, 0, &Greater);
        assert_eq!(seq, vec![9, 6, 7, 3, 2, 5]);
    }

    #[test]
    fn test_build_heap() {
        let mut seq = vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
        build_heap(&mut seq, &Greater);
        assert_eq!(seq, vec![16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
        assert!(is_heap(&seq, &Greater));
    }

    #[test]
    fn test_build_heap_trivial_sizes() {
        let mut empty: Vec<i32> = Vec::new();
        build_heap(&mut empty, &Less);
        assert!(empty.is_empty());

        let mut one = vec![42];
        build_heap(&mut one, &Less);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_push_and_pop() {
        let mut heap = Vec::new();
        for x in [5, 3, 8, 1, 9, 2] {
            push_heap(&mut heap, x, &Less);
            assert!(is_heap(&heap, &Less));
        }

        let mut out = Vec::new();
        while let Some(x) = pop_heap(&mut heap, &Less) {
            out.push(x);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(pop_heap(&mut heap, &Less), None);
    }

    #[test]
    fn test_sift_up_stops_on_tie() {
        let mut seq = vec![1, 4, 1];
        sift_up(&mut seq, 2, &Less);
        assert_eq!(seq, vec![1, 4, 1]);
    }
}
