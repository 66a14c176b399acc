/// Median-of-three pivot placement, Bentley-McIlroy style.
///
/// Orders `v[0]`, `v[mid]` and `v[last]` with at most three swaps, then
/// parks the median at `last - 1` as the pivot-to-be. The minimum left at
/// position 0 and the maximum left at `last` stay out of the partition
/// scan and bound it from both ends.
///
/// Meaningless below three elements; such ranges are left untouched (the
/// callers' cutoff keeps them away from here in the first place).
pub(crate) fn median3<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    if v.len() < 3 {
        return;
    }

    let last = v.len() - 1;
    let mid = last / 2;

    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    v.swap(mid, last - 1);
}
