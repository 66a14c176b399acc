/// Sorts `v` with a counting sort over the value range.
///
/// One scan finds min and max, a counting buffer of `max - min + 1` slots
/// tallies `value - min` occurrences, and the counts are replayed back into
/// `v` in ascending order. O(n + k) where k is the value range.
///
/// The buffer is sized by the value *range*, not by `v.len()`: feeding a
/// sequence whose spread is disproportionate to its length (say two values
/// 2^40 apart) allocates a buffer of that spread. Keeping the range sane is
/// the caller's responsibility, it is not guarded here.
pub fn sort(v: &mut [i64]) {
    // Empty input has no first element to seed min/max from.
    if v.is_empty() {
        return;
    }

    let mut min = v[0];
    let mut max = v[0];
    for x in &v[1..] {
        min = min.min(*x);
        max = max.max(*x);
    }

    // Widen to i128 so `max - min` cannot wrap for extreme keys.
    let range = (max as i128 - min as i128) as usize + 1;
    let mut counts = vec![0usize; range];

    for x in v.iter() {
        counts[(*x as i128 - min as i128) as usize] += 1;
    }

    let mut idx = 0;
    for (offset, count) in counts.iter().enumerate() {
        let value = min + offset as i64;
        for _ in 0..*count {
            v[idx] = value;
            idx += 1;
        }
    }
}
