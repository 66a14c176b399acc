//! The two partition schemes shared by the quicksort variants.
//!
//! Both take the pivot from the last element of the range they are handed
//! and return its final index. Both scan loops carry explicit bounds, so
//! degenerate inputs (all-equal, pivot is the extremum) cannot read outside
//! the range.

/// Hoare-style partition around the last element of `v`.
///
/// The pivot stays parked at the end while inward scans swap crossings;
/// it is finally swapped to the meeting point. Elements left of the
/// returned index compare less-or-equal to the pivot, elements right of it
/// greater-or-equal.
pub(crate) fn partition_simple<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) -> usize {
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut i = 0;
    // Exclusive bound of the right scan; `rest[j - 1]` is its candidate.
    let mut j = rest.len();
    loop {
        while i < j && is_less(&rest[i], pivot) {
            i += 1;
        }
        while i < j && is_less(pivot, &rest[j - 1]) {
            j -= 1;
        }
        if i + 1 >= j {
            break;
        }
        rest.swap(i, j - 1);
        i += 1;
        j -= 1;
    }

    v.swap(i, len - 1);
    i
}

/// Partition used by the median-of-three quicksorts.
///
/// The pivot source is still the last element, but it is moved to the front
/// where it doubles as the left scan's lower sentinel. The left scan skips
/// values less-or-equal to the pivot, the right scan skips values greater,
/// so runs of duplicate keys terminate both scans instead of pushing them
/// out of the range.
pub(crate) fn partition_med<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) -> usize {
    let len = v.len();
    if len < 2 {
        return 0;
    }

    v.swap(0, len - 1);
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let mut lo = 0;
    // Exclusive bound of the right scan; `hi == 0` parks it on the pivot.
    let mut hi = rest.len();
    loop {
        while hi > 0 && is_less(pivot, &rest[hi - 1]) {
            hi -= 1;
        }
        while lo < hi && !is_less(pivot, &rest[lo]) {
            lo += 1;
        }
        if lo >= hi {
            break;
        }
        rest.swap(lo, hi - 1);
        lo += 1;
        hi -= 1;
    }

    // `rest[hi - 1]` maps to `v[hi]`: the right scan's resting place is the
    // pivot's sorted position.
    v.swap(0, hi);
    hi
}
