use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sortbench::{bubble, counting, patterns, quick, quick_median, quick_tail};

const BENCH_SIZES: &[usize] = &[1 << 8, 1 << 12, 1 << 15];

/// Bubble sort only stays measurable around the cutoff scale.
const BUBBLE_MAX_LEN: usize = 1 << 12;

fn pattern_inputs(len: usize) -> Vec<(&'static str, Vec<i64>)> {
    vec![
        ("random", patterns::random(len)),
        (
            "random_dup",
            patterns::random_uniform(len, (len as i64 / 10).max(16)),
        ),
        ("zipf", patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending(len)),
        ("descending", patterns::descending(len)),
        ("all_equal", patterns::all_equal(len)),
    ]
}

fn bench_sorts(c: &mut Criterion) {
    let sorts: &[(&str, fn(&mut [i64]))] = &[
        ("bubble", bubble::sort::<i64>),
        ("counting", counting::sort),
        ("quick", quick::sort::<i64>),
        ("quick_tail", quick_tail::sort::<i64>),
        ("quick_median", quick_median::sort::<i64>),
    ];

    for &len in BENCH_SIZES {
        for (pattern, input) in pattern_inputs(len) {
            let mut group = c.benchmark_group(format!("{pattern}-{len}"));

            for (name, sort) in sorts {
                if *name == "bubble" && len > BUBBLE_MAX_LEN {
                    continue;
                }

                group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
                    b.iter_batched_ref(|| input.clone(), |v| sort(v), BatchSize::SmallInput)
                });
            }

            group.finish();
        }
    }
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
