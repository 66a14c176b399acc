//! Input pattern generators for tests and benchmarks.
//!
//! All generators are deterministic per process: they share one seed, drawn
//! from the `SORTBENCH_SEED` environment variable if set and from entropy
//! otherwise, so a failing run can be reproduced by exporting the seed.

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    std::env::var("SORTBENCH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// The seed all generators derive from.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(*SEED)
}

/// `len` values drawn uniformly from the full `i64` domain.
pub fn random(len: usize) -> Vec<i64> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// `len` values drawn uniformly from `0..range`. Guarantees duplicates once
/// `len` outgrows `range`.
pub fn random_uniform(len: usize, range: i64) -> Vec<i64> {
    let mut rng = rng();
    let range = range.max(1);
    (0..len).map(|_| rng.gen_range(0..range)).collect()
}

/// Zipfian-distributed values over `1..=len`, the classic skewed-duplicates
/// pattern.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    let mut rng = rng();
    let dist = ZipfDistribution::new(len.max(1), exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i64> {
    vec![11; len]
}
