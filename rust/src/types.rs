//! Type definitions shared by the runner, analysis and reporting modules.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::error::LabError;

/// The four algorithms studied, one per complexity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    ArrayAccess,
    BinarySearch,
    LinearSearch,
    FindAllPairs,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::ArrayAccess,
        Algorithm::BinarySearch,
        Algorithm::LinearSearch,
        Algorithm::FindAllPairs,
    ];

    /// Human readable name, as printed in tables and reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::ArrayAccess => "Array Access",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::FindAllPairs => "Find All Pairs",
        }
    }

    /// Name used on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Algorithm::ArrayAccess => "array-access",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::FindAllPairs => "find-all-pairs",
        }
    }

    /// `"linear_search"` for `LinearSearch`; used in report file names.
    pub fn file_stem(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }

    pub fn complexity_class(self) -> ComplexityClass {
        match self {
            Algorithm::ArrayAccess => ComplexityClass::Constant,
            Algorithm::BinarySearch => ComplexityClass::Logarithmic,
            Algorithm::LinearSearch => ComplexityClass::Linear,
            Algorithm::FindAllPairs => ComplexityClass::Quadratic,
        }
    }

    /// Static description of the algorithm's expected behaviour.
    pub fn description(self) -> &'static AlgorithmDescription {
        match self {
            Algorithm::ArrayAccess => &ARRAY_ACCESS_DESCRIPTION,
            Algorithm::BinarySearch => &BINARY_SEARCH_DESCRIPTION,
            Algorithm::LinearSearch => &LINEAR_SEARCH_DESCRIPTION,
            Algorithm::FindAllPairs => &FIND_ALL_PAIRS_DESCRIPTION,
        }
    }

    /// Algorithm for a 1-based menu position.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LabError;

    /// Accepts display names ("Binary Search"), CLI names ("binary-search")
    /// and snake case ("binary_search"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.cli_name() == normalized)
            .ok_or_else(|| LabError::UnknownAlgorithm(s.to_string()))
    }
}

/// Big-O class of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Quadratic,
}

impl ComplexityClass {
    pub fn notation(self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Quadratic => "O(n²)",
        }
    }

    /// Time ratio expected when the input size doubles.
    pub fn expected_doubling_ratio(self) -> f64 {
        match self {
            ComplexityClass::Constant => 1.0,
            // log2(2n) / log2(n) for the sizes used in class
            ComplexityClass::Logarithmic => 1.1,
            ComplexityClass::Linear => 2.0,
            ComplexityClass::Quadratic => 4.0,
        }
    }
}

/// Static explanation attached to every experiment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescription {
    pub complexity: &'static str,
    pub explanation: &'static str,
    pub pattern: &'static str,
}

static ARRAY_ACCESS_DESCRIPTION: AlgorithmDescription = AlgorithmDescription {
    complexity: "O(1) - Constant Time",
    explanation: "Direct memory access - same time regardless of array size",
    pattern: "Time should stay roughly constant as input size increases",
};

static BINARY_SEARCH_DESCRIPTION: AlgorithmDescription = AlgorithmDescription {
    complexity: "O(log n) - Logarithmic Time",
    explanation: "Eliminates half the search space each step",
    pattern: "Time should grow very slowly - doubling input adds only one step",
};

static LINEAR_SEARCH_DESCRIPTION: AlgorithmDescription = AlgorithmDescription {
    complexity: "O(n) - Linear Time",
    explanation: "Must potentially check every element in worst case",
    pattern: "Time should double when input size doubles",
};

static FIND_ALL_PAIRS_DESCRIPTION: AlgorithmDescription = AlgorithmDescription {
    complexity: "O(n²) - Quadratic Time",
    explanation: "Nested loops check every pair of elements",
    pattern: "Time should quadruple when input size doubles",
};

/// Measurements for one algorithm across a series of input sizes.
///
/// `sizes`, `times`, `ratios` and `operations` always have the same length:
/// the only way to add a row is [`ExperimentResult::record`].
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentResult {
    algorithm: Algorithm,
    sizes: Vec<usize>,
    #[serde(rename = "times_secs", serialize_with = "serialize_secs")]
    times: Vec<Duration>,
    ratios: Vec<Option<f64>>,
    operations: Vec<u64>,
    description: &'static AlgorithmDescription,
}

impl ExperimentResult {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            sizes: Vec::new(),
            times: Vec::new(),
            ratios: Vec::new(),
            operations: Vec::new(),
            description: algorithm.description(),
        }
    }

    /// Append one measured size.
    ///
    /// The ratio is taken against the previous row's time. The first row has
    /// no ratio; a zero previous time yields 1.0.
    pub fn record(&mut self, size: usize, time: Duration, operations: u64) {
        let ratio = self.times.last().map(|previous| {
            if previous.is_zero() {
                1.0
            } else {
                time.as_secs_f64() / previous.as_secs_f64()
            }
        });

        self.sizes.push(size);
        self.times.push(time);
        self.ratios.push(ratio);
        self.operations.push(operations);
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    pub fn ratios(&self) -> &[Option<f64>] {
        &self.ratios
    }

    pub fn operations(&self) -> &[u64] {
        &self.operations
    }

    pub fn description(&self) -> &'static AlgorithmDescription {
        self.description
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate over `(size, time, ratio, operations)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Duration, Option<f64>, u64)> + '_ {
        self.sizes
            .iter()
            .zip(&self.times)
            .zip(&self.ratios)
            .zip(&self.operations)
            .map(|(((&size, &time), &ratio), &ops)| (size, time, ratio, ops))
    }
}

fn serialize_secs<S: Serializer>(times: &[Duration], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(times.iter().map(Duration::as_secs_f64))
}
