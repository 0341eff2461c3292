mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rainmark::analysis::analyze_region;
use rainmark::region::{Mark, MarkColor};

const MARK_COUNTS: [usize; 5] = [2, 10, 50, 200, 500];

fn make_marks(count: usize, side: f32) -> Vec<Mark> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0xA9A1_u64 ^ count as u64);
    (0..count)
        .map(|i| {
            Mark::new(
                format!("m{i}"),
                rng.random_range(0.0..side),
                rng.random_range(0.0..side),
                rng.random_range(1.0..8.0),
                if i % 2 == 0 {
                    MarkColor::Red
                } else {
                    MarkColor::Blue
                },
            )
        })
        .collect()
}

fn analysis_benches(c: &mut Criterion) {
    let side = 450.0;
    let mut group = c.benchmark_group("analysis/pairwise_scan");

    for &count in &MARK_COUNTS {
        let marks = make_marks(count, side);
        group.throughput(common::elements_throughput(count * (count - 1) / 2));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let stats = analyze_region(&marks, side, side, 0).expect("valid dims");
                black_box(stats.count);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = analysis_benches
}
criterion_main!(benches);
