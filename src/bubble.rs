use std::cmp::Ordering;

/// Sorts `v` with an adaptive bubble sort.
///
/// Repeated passes over a shrinking suffix, swapping adjacent elements that
/// are out of order. A pass that performs no swap proves the remainder is
/// sorted and exits early, so already-sorted input costs a single pass.
/// O(n^2) worst case; also serves as the small-range fallback inside the
/// cutoff-based quicksorts, where its low constant factor beats the
/// recursion overhead.
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn bubble_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let len = v.len();

    for i in 0..len {
        let mut swapped = false;

        for j in 0..(len - i - 1) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        // A swap-free pass means the suffix was already in order.
        if !swapped {
            return;
        }
    }
}
