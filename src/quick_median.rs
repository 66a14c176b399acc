use std::cmp::Ordering;

use crate::bubble;
use crate::partition;
use crate::pivot;
use crate::DEFAULT_CUTOFF;

/// The effective cutoff never drops below this: ranges above the cutoff
/// must hold at least three elements for median-of-three to be defined.
const MIN_CUTOFF: usize = 2;

/// Sorts `v` with the median-of-three quicksort, falling back to bubble
/// sort for ranges at or below the cutoff.
///
/// The variant of choice: median-of-three pivoting keeps already-ordered
/// and adversarial inputs away from the quadratic worst case, and the
/// cutoff keeps small ranges cheap.
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, DEFAULT_CUTOFF, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quicksort(v, DEFAULT_CUTOFF, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Same as [`sort`] with an explicit cutoff, mainly so tests and benchmarks
/// can force either side of the cutover.
pub fn sort_with_cutoff<T: Ord>(v: &mut [T], cutoff: usize) {
    quicksort(v, cutoff.max(MIN_CUTOFF), &mut |a, b| a.lt(b));
}

fn quicksort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], cutoff: usize, is_less: &mut F) {
    if v.len() <= cutoff {
        bubble::bubble_sort(v, is_less);
        return;
    }

    // At least three elements from here on. median3 parks the pivot at
    // `last - 1` and leaves the minimum and maximum of the probed triple as
    // sentinels at the ends, so only the interior needs partitioning.
    pivot::median3(v, is_less);
    let last = v.len() - 1;
    let q = 1 + partition::partition_med(&mut v[1..last], is_less);

    let (left, right) = v.split_at_mut(q);
    quicksort(left, cutoff, is_less);
    quicksort(&mut right[1..], cutoff, is_less);
}
