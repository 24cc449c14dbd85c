//! Prime Generation Benchmarks
//!
//! Measures full-drain throughput of the wheel sieve across target
//! magnitudes, plus the fixed cost of construction alone.
//!
//! # Key Metrics
//!
//! - Full drain: dominated by composite marking; should scale close to
//!   O(n log log n) in the underlying bound
//! - Construction: one estimate plus one zeroed allocation

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use decima_core::Sieve;

// =============================================================================
// Full Drain
// =============================================================================

fn bench_full_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_drain");

    for &count in &[1_000usize, 10_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let sieve = Sieve::with_prime_count(count).unwrap();
                let mut last = 0;
                for prime in sieve {
                    last = prime;
                }
                black_box(last)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Construction
// =============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_construction");

    group.bench_function("one_million_target", |b| {
        b.iter(|| black_box(Sieve::with_prime_count(1_000_000).unwrap()))
    });

    group.bench_function("first_prime_only", |b| {
        b.iter(|| {
            let mut sieve = Sieve::with_prime_count(1_000_000).unwrap();
            black_box(sieve.next())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_full_drain, bench_construction);
criterion_main!(benches);
