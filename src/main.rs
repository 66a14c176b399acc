use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use sortbench::{bubble, counting, quick, quick_median, quick_tail, DEFAULT_CUTOFF};

/// Benchmark harness for the in-memory integer sorts in this crate.
///
/// Reads whitespace-separated integers from a file, sorts them with the
/// selected algorithm, verifies the result and reports either the sorted
/// sequence or the elapsed wall-clock time.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a text file containing whitespace-separated integers
    #[arg(short, long)]
    file: PathBuf,

    /// Sorting algorithm to run
    #[arg(short, long, value_enum, default_value = "quick-median")]
    algorithm: Algorithm,

    /// Print the sorted sequence instead of the elapsed time
    #[arg(short, long)]
    print: bool,

    /// Range length below which the cutoff-based quicksorts delegate to
    /// bubble sort
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Adaptive bubble sort
    Bubble,
    /// Counting sort, bounded by the value range
    Counting,
    /// Quicksort with bubble-sort cutoff
    Quick,
    /// Quicksort with tail-recursion-minimizing outer loop
    QuickTail,
    /// Quicksort with median-of-three pivoting and bubble-sort cutoff
    QuickMedian,
}

impl Algorithm {
    fn run(self, samples: &mut [i64], cutoff: usize) {
        match self {
            Algorithm::Bubble => bubble::sort(samples),
            Algorithm::Counting => counting::sort(samples),
            Algorithm::Quick => quick::sort_with_cutoff(samples, cutoff),
            Algorithm::QuickTail => quick_tail::sort(samples),
            Algorithm::QuickMedian => quick_median::sort_with_cutoff(samples, cutoff),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut samples = read_samples(&cli.file)?;
    debug!(
        "read {} samples from {}",
        samples.len(),
        cli.file.display()
    );

    let start = Instant::now();
    cli.algorithm.run(&mut samples, cli.cutoff);
    let elapsed = start.elapsed();

    // The checker exists to catch algorithm defects; a partially-sorted
    // result must never be reported as if it were valid.
    if !samples.is_sorted() {
        bail!(
            "algorithm {} failed to produce a sorted sequence",
            algorithm_name(cli.algorithm)
        );
    }

    if cli.print {
        let mut out = BufWriter::new(io::stdout().lock());
        for x in &samples {
            writeln!(out, "{x}")?;
        }
        out.flush()?;
    } else {
        println!("execution time: {} sec", elapsed.as_secs_f64());
    }

    Ok(())
}

fn algorithm_name(algorithm: Algorithm) -> String {
    algorithm
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| format!("{algorithm:?}"))
}

fn read_samples(path: &Path) -> Result<Vec<i64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("{} is an invalid path", path.display()))?;

    let samples = contents
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .with_context(|| format!("invalid sample {:?} in {}", tok, path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if samples.is_empty() {
        bail!("{} contains no samples", path.display());
    }

    Ok(samples)
}
