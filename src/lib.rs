//! In-place sorting algorithms for the `sortbench` harness.
//!
//! One module per algorithm, the way a sort testbed is usually laid out:
//! the comparison sorts expose the `sort`/`sort_by` pair and operate on any
//! `&mut [T]`, counting sort is value-bounded and fixed to `i64` keys. The
//! shared partition and pivot-selection primitives live in their own
//! modules. All algorithms sort in place and never retain a reference to
//! the input beyond the call.

pub mod bubble;
pub mod counting;
pub mod patterns;
pub mod quick;
pub mod quick_median;
pub mod quick_tail;

mod partition;
mod pivot;

/// Range length below which the cutoff-based quicksorts delegate to bubble
/// sort. Empirically tuned, not derived.
pub const DEFAULT_CUTOFF: usize = 256;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}
