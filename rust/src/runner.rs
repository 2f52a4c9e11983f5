//! Timing experiments: generate input, run trials, aggregate durations.
//!
//! Data generation happens outside the timed region. Only the algorithm call
//! is measured, with `Instant`, and its result goes through `black_box` so the
//! optimizer cannot drop the work.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::algorithms::{
    array_access, binary_search, find_all_pairs_with_sum, linear_search_with_counter,
};
use crate::config::{ExperimentConfig, Statistic};
use crate::data::DataGenerator;
use crate::error::LabResult;
use crate::types::{Algorithm, ExperimentResult};

/// Target sum used when the pair input has fewer than two elements.
const FALLBACK_PAIR_TARGET: i64 = 10;

/// Aggregated measurements for one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    /// Mean or median of `trial_times`.
    pub time: Duration,
    /// Operation count of the first trial.
    pub operations: u64,
    pub trial_times: Vec<Duration>,
}

/// Runs algorithms against generated data of increasing size.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    config: ExperimentConfig,
    generator: DataGenerator,
}

impl ExperimentRunner {
    /// Create a runner, validating the configuration first.
    pub fn new(config: ExperimentConfig) -> LabResult<Self> {
        config.validate()?;
        let generator = DataGenerator::from_seed(config.seed, config.value_range());
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Measure `algorithm` at every size in `sizes`, in order.
    ///
    /// The returned result has exactly one row per entry of `sizes`.
    pub fn run_experiment(&mut self, algorithm: Algorithm, sizes: &[usize]) -> ExperimentResult {
        info!(%algorithm, ?sizes, trials = self.config.trials, "running experiment");

        let mut result = ExperimentResult::new(algorithm);
        for &size in sizes {
            let summary = self.run_single_algorithm(algorithm, size);
            debug!(
                %algorithm,
                size,
                time_secs = summary.time.as_secs_f64(),
                operations = summary.operations,
                "size measured"
            );
            result.record(size, summary.time, summary.operations);
        }
        result
    }

    /// Run the configured number of trials at one size.
    pub fn run_single_algorithm(&mut self, algorithm: Algorithm, size: usize) -> TrialSummary {
        let mut trial_times = Vec::with_capacity(self.config.trials);
        let mut representative_operations = 0;

        for trial in 0..self.config.trials {
            let (time, operations) = self.run_trial(algorithm, size);
            debug!(%algorithm, size, trial, nanos = time.as_nanos() as u64, operations, "trial");
            trial_times.push(time);
            if trial == 0 {
                representative_operations = operations;
            }
        }

        TrialSummary {
            time: aggregate(&trial_times, self.config.statistic),
            operations: representative_operations,
            trial_times,
        }
    }

    fn run_trial(&mut self, algorithm: Algorithm, size: usize) -> (Duration, u64) {
        match algorithm {
            Algorithm::ArrayAccess => {
                let data = self.generator.random(size);
                let indices = [size / 4, size / 2, size * 3 / 4];
                let (time, _) = measure(|| {
                    for &index in &indices {
                        black_box(array_access(&data, black_box(index)));
                    }
                });
                (time, indices.len() as u64)
            }
            Algorithm::BinarySearch => {
                let data = self.generator.sorted(size);
                let target = data.get(size * 3 / 4).copied().unwrap_or(1);
                let (time, _) = measure(|| binary_search(&data, black_box(&target)));
                (time, estimated_binary_search_steps(size))
            }
            Algorithm::LinearSearch => {
                let data = self.generator.random(size);
                // last element: the worst case for a scan from the front
                let target = data.last().copied().unwrap_or(1);
                let (time, outcome) =
                    measure(|| linear_search_with_counter(&data, black_box(&target)));
                (time, outcome.comparisons)
            }
            Algorithm::FindAllPairs => {
                let actual_size = size.min(self.config.pair_size_cap);
                let data = self.generator.random(actual_size);
                let target = match data.as_slice() {
                    [first, second, ..] => first.saturating_add(*second),
                    _ => FALLBACK_PAIR_TARGET,
                };
                let (time, outcome) =
                    measure(|| find_all_pairs_with_sum(&data, black_box(target)));
                (time, outcome.comparisons)
            }
        }
    }
}

/// Sizes used by the quick side-by-side demonstration.
pub const DEMO_SIZES: [usize; 4] = [100, 200, 400, 800];

/// The quadratic algorithm only sees this many elements in the demonstration.
const DEMO_PAIR_CAP: usize = 50;

/// One untrialled timing of every algorithm at a single size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub size: usize,
    pub array_access: Duration,
    pub linear_search: Duration,
    pub binary_search: Duration,
    pub find_all_pairs: Duration,
}

/// Time each algorithm once on the same random data.
///
/// Array access reads the middle element, both searches look for the last
/// element (sorted copy for binary search) and pair finding runs on at most
/// the first 50 elements.
pub fn snapshot(generator: &mut DataGenerator, size: usize) -> Snapshot {
    let data = generator.random(size);

    let (array_access_time, _) = measure(|| array_access(&data, size / 2));

    let last = data.last().copied().unwrap_or(1);
    let (linear_search_time, _) = measure(|| linear_search_with_counter(&data, &last));

    let mut sorted = data.clone();
    sorted.sort_unstable();
    let sorted_last = sorted.last().copied().unwrap_or(1);
    let (binary_search_time, _) = measure(|| binary_search(&sorted, &sorted_last));

    let small = &data[..size.min(DEMO_PAIR_CAP)];
    let target = match small {
        [first, second, ..] => first.saturating_add(*second),
        _ => FALLBACK_PAIR_TARGET,
    };
    let (find_all_pairs_time, _) = measure(|| find_all_pairs_with_sum(small, target));

    Snapshot {
        size,
        array_access: array_access_time,
        linear_search: linear_search_time,
        binary_search: binary_search_time,
        find_all_pairs: find_all_pairs_time,
    }
}

/// Time a closure with a monotonic clock.
pub fn measure<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = black_box(f());
    (start.elapsed(), result)
}

/// Combine trial durations. An empty slice gives zero.
pub fn aggregate(times: &[Duration], statistic: Statistic) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }

    match statistic {
        Statistic::Mean => times.iter().sum::<Duration>() / times.len() as u32,
        Statistic::Median => {
            let mut sorted = times.to_vec();
            sorted.sort_unstable();
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                (sorted[mid - 1] + sorted[mid]) / 2
            } else {
                sorted[mid]
            }
        }
    }
}

/// ⌈log₂ n⌉ comparisons, the worst case for binary search; 1 for empty input.
pub fn estimated_binary_search_steps(size: usize) -> u64 {
    match size {
        0 => 1,
        1 => 0,
        n => u64::from((n - 1).ilog2() + 1),
    }
}
