//! Share-estimator benchmarks.
//!
//! Benchmarks repeated estimation over growing scenario sets, matching the
//! per-edit call pattern of the simulator panel.
//! Run with: cargo bench -p conjoint-analysis --bench estimator_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use conjoint_analysis::shares::{Scenario, ShareEstimator};
use conjoint_core::space::AttributeSpace;
use conjoint_core::types::{AdTier, ProductProfile, VideoQuality};

/// Build a scenario set by cycling through domain levels.
fn make_scenarios(count: usize) -> Vec<Scenario> {
    let prices = [6.99, 11.99, 15.49, 22.99];
    (0..count)
        .map(|i| {
            Scenario::new(
                i as u32,
                format!("scenario_{i}"),
                ProductProfile::new(
                    prices[i % prices.len()],
                    AdTier::ALL[i % AdTier::ALL.len()],
                    VideoQuality::ALL[i % VideoQuality::ALL.len()],
                    [1u8, 2, 4][i % 3],
                ),
            )
        })
        .collect()
}

fn share_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("share_estimation");

    let space = AttributeSpace::new();
    let estimator = ShareEstimator::new();
    for count in [2usize, 4, 8] {
        let scenarios = make_scenarios(count);
        group.bench_with_input(
            BenchmarkId::new("estimate", count),
            &scenarios,
            |b, scenarios| {
                b.iter(|| estimator.estimate(&space, scenarios).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, share_estimation);
criterion_main!(benches);
