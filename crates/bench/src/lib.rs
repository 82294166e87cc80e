use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const SMALL_INPUT_MAX: usize = 1024;
const MEDIUM_INPUT_MAX: usize = 4096;
const RNG_SEED: u64 = 0x5EED_2026;

pub const RANDOM_MAX: u64 = 1000;
pub const NEARLY_SORTED_SWAPS: usize = 10;
pub const DUPLICATE_UNIQUE: u64 = 10;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset by input size. Large inputs switch to flat sampling,
/// since quadratic cases make each iteration expensive.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= SMALL_INPUT_MAX {
        group.sampling_mode(SamplingMode::Auto);
        apply_small_runtime_config(group);
    } else if size <= MEDIUM_INPUT_MAX {
        group.sampling_mode(SamplingMode::Flat);
        apply_medium_runtime_config(group);
    } else {
        group.sampling_mode(SamplingMode::Flat);
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
    Duplicates,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::Random,
    Distribution::Sorted,
    Distribution::ReverseSorted,
    Distribution::NearlySorted,
    Distribution::Duplicates,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse_sorted",
            Self::NearlySorted => "nearly_sorted",
            Self::Duplicates => "many_duplicates",
        }
    }
}

pub fn generate<R: Rng + ?Sized>(dist: Distribution, size: usize, rng: &mut R) -> Vec<u64> {
    match dist {
        Distribution::Random => (0..size).map(|_| rng.random_range(0..=RANDOM_MAX)).collect(),
        Distribution::Sorted => (0..size as u64).collect(),
        Distribution::ReverseSorted => (0..size as u64).rev().collect(),
        Distribution::NearlySorted => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 0 {
                for _ in 0..NEARLY_SORTED_SWAPS {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Duplicates => (0..size)
            .map(|_| rng.random_range(0..DUPLICATE_UNIQUE))
            .collect(),
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BenchError {
    #[error("{algorithm} produced an incorrect result on {distribution} input of size {size}")]
    IncorrectResult {
        algorithm: String,
        distribution: &'static str,
        size: usize,
    },
    #[error("at least one iteration is required")]
    NoIterations,
}

/// Times `sort` on fresh copies of `input`, once per iteration.
///
/// Every run is checked against a reference sort of `input`; the first wrong
/// answer aborts the measurement.
pub fn measure(
    algorithm: &str,
    dist: Distribution,
    input: &[u64],
    iterations: usize,
    sort: fn(&mut [u64]),
) -> Result<Vec<Duration>, BenchError> {
    if iterations == 0 {
        return Err(BenchError::NoIterations);
    }

    let mut expected = input.to_vec();
    expected.sort_unstable();

    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let mut data = input.to_vec();
        let start = Instant::now();
        sort(&mut data);
        times.push(start.elapsed());
        black_box(&data);

        if data != expected {
            return Err(BenchError::IncorrectResult {
                algorithm: algorithm.to_owned(),
                distribution: dist.label(),
                size: input.len(),
            });
        }
    }

    Ok(times)
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub algorithm: &'static str,
    pub distribution: Distribution,
    pub size: usize,
    pub outcome: Result<Vec<Duration>, BenchError>,
}

/// Runs every algorithm on every distribution and size.
///
/// All algorithms see the same input for a given distribution and size. A
/// failing combination is recorded in its cell and does not stop the sweep.
pub fn compare<R: Rng + ?Sized>(
    algorithms: &[(&'static str, fn(&mut [u64]))],
    distributions: &[Distribution],
    sizes: &[usize],
    iterations: usize,
    rng: &mut R,
) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(algorithms.len() * distributions.len() * sizes.len());

    for &dist in distributions {
        for &size in sizes {
            let input = generate(dist, size, rng);
            for &(name, sort) in algorithms {
                cells.push(Cell {
                    algorithm: name,
                    distribution: dist,
                    size,
                    outcome: measure(name, dist, &input, iterations, sort),
                });
            }
        }
    }

    cells
}
