//! Simulator benchmarks.
//!
//! Benchmarks panel generation at the default size and above.
//! Run with: cargo bench -p conjoint-analysis --bench simulator_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use conjoint_analysis::simulation::ChoiceSimulator;
use conjoint_core::space::AttributeSpace;

fn panel_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_generation");
    group.sample_size(20);

    let space = AttributeSpace::new();
    for respondents in [200u32, 1000, 5000] {
        group.bench_with_input(
            BenchmarkId::new("generate", respondents),
            &respondents,
            |b, &respondents| {
                b.iter(|| {
                    let simulator = ChoiceSimulator::new(respondents, 8).with_seed(42);
                    simulator.generate(&space).unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, panel_generation);
criterion_main!(benches);
