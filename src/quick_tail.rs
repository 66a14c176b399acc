use std::cmp::Ordering;

use crate::partition;

/// Sorts `v` with a quicksort whose outer tail call is replaced by a loop.
///
/// After partitioning, only the smaller side is recursed into; the loop
/// continues on the larger one. A recursed range is at most half its
/// parent, so stack depth is O(log n) even when the plain last-element
/// pivot degenerates (already-sorted or reverse-sorted input), where the
/// cost is still quadratic but the stack stays flat.
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<'a, T, F: FnMut(&T, &T) -> bool>(mut v: &'a mut [T], is_less: &mut F) {
    while v.len() > 1 {
        let q = partition::partition_simple(v, is_less);

        let (left, right) = v.split_at_mut(q);
        let (_pivot, right) = right.split_at_mut(1);

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
