//! Benchmark for the eleven age-summation variants.
//!
//! Compares the index loop against the composed, point-free versions to
//! show what (if anything) the intermediate vectors cost.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lambda_lessons::coders::{Coder, Variant};
use std::hint::black_box;

fn team(size: u32) -> Vec<Coder> {
    (0..size).map(|index| Coder::anonymous(18 + index % 50)).collect()
}

// =============================================================================
// Variant Benchmarks
// =============================================================================

fn benchmark_variants(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("total_ages");

    for size in [10_u32, 1_000, 100_000] {
        let coders = team(size);
        group.throughput(Throughput::Elements(u64::from(size)));

        for variant in Variant::ALL {
            group.bench_with_input(
                BenchmarkId::new(variant.to_string(), size),
                &coders,
                |bencher, coders| {
                    bencher.iter_batched(
                        || coders.clone(),
                        |json| black_box(variant.total_ages(json)),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_variants);
criterion_main!(benches);
