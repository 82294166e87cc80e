use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{ALL_DISTRIBUTIONS, Distribution, apply_runtime_config, generate, measure};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quicksort::{SortAlgorithm, algorithm_name, all_algorithms, sort_with};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BENCH_SIZES: [usize; 3] = [1024, 4096, 16384];
const PIVOT_SEED: u64 = 42;
const PARTITION_SIZE: usize = 65536;

fn bench_sort(c: &mut Criterion) {
    for &dist in &ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_config(&mut group, size);
            let base = generate(dist, size, &mut StdRng::seed_from_u64(seed_for(dist, size)));

            for &algo in all_algorithms() {
                verify(algo, dist, &base);
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        time_clones(&base, iters, |data| sort_with(algo, data, Some(PIVOT_SEED)))
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| time_clones(&base, iters, |data| data.sort_unstable()));
            });
        }

        group.finish();
    }
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition/many_duplicates");
    apply_runtime_config(&mut group, PARTITION_SIZE);
    let base = generate(
        Distribution::Duplicates,
        PARTITION_SIZE,
        &mut StdRng::seed_from_u64(seed_for(Distribution::Duplicates, PARTITION_SIZE)),
    );
    let high = PARTITION_SIZE - 1;

    group.bench_function(BenchmarkId::new("lomuto", PARTITION_SIZE), |bencher| {
        bencher.iter_custom(|iters| {
            time_clones(&base, iters, |data| {
                black_box(quicksort::partition(data, 0, high, high, |a, b| a < b));
            })
        });
    });

    group.bench_function(BenchmarkId::new("three_way", PARTITION_SIZE), |bencher| {
        bencher.iter_custom(|iters| {
            time_clones(&base, iters, |data| {
                black_box(quicksort::partition_three_way(data, 0, high, |a, b| a < b));
            })
        });
    });

    group.finish();
}

fn time_clones(base: &[u64], iters: u64, mut run: impl FnMut(&mut [u64])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        run(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

fn verify(algo: SortAlgorithm, dist: Distribution, base: &[u64]) {
    let sort: fn(&mut [u64]) = match algo {
        SortAlgorithm::Deterministic => quicksort::sort,
        SortAlgorithm::Randomized => |data| quicksort::sort_randomized(data, Some(PIVOT_SEED)),
        SortAlgorithm::ThreeWay => quicksort::sort_three_way,
    };
    if let Err(err) = measure(algorithm_name(algo), dist, base, 1, sort) {
        panic!("{err}");
    }
}

#[inline]
fn seed_for(dist: Distribution, size: usize) -> u64 {
    let d = match dist {
        Distribution::Random => 11_u64,
        Distribution::Sorted => 12_u64,
        Distribution::ReverseSorted => 13_u64,
        Distribution::NearlySorted => 14_u64,
        Distribution::Duplicates => 15_u64,
    };

    mix_seed(0x5EED_2026 ^ (d << 48) ^ (size as u64))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_sort, bench_partition);
criterion_main!(benches);
