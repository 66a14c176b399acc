use std::cmp::Ordering;

use crate::bubble;
use crate::partition;
use crate::DEFAULT_CUTOFF;

/// Sorts `v` with a recursive quicksort that falls back to bubble sort for
/// ranges at or below the cutoff.
///
/// The pivot is the last element of the current range, partitioned with the
/// duplicate-tolerant scheme. No pivot-selection heuristic: worst case is
/// O(n^2) on adversarial input, which is what [`crate::quick_median`]
/// exists to avoid.
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, DEFAULT_CUTOFF, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quicksort(v, DEFAULT_CUTOFF, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Same as [`sort`] with an explicit cutoff, mainly so tests and benchmarks
/// can force either side of the cutover.
pub fn sort_with_cutoff<T: Ord>(v: &mut [T], cutoff: usize) {
    quicksort(v, cutoff, &mut |a, b| a.lt(b));
}

fn quicksort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], cutoff: usize, is_less: &mut F) {
    // Below the cutoff the recursion overhead loses against a plain
    // quadratic pass. Also terminates the recursion: empty and
    // single-element ranges land here for any sane cutoff.
    if v.len() <= cutoff {
        bubble::bubble_sort(v, is_less);
        return;
    }

    let q = partition::partition_med(v, is_less);
    let (left, right) = v.split_at_mut(q);
    quicksort(left, cutoff, is_less);
    quicksort(&mut right[1..], cutoff, is_less);
}
