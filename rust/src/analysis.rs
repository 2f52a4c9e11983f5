//! Rule-based check of observed ratios against the theoretical class.
//!
//! Expected average ratio bands when sizes double:
//!
//! - constant: below 1.5
//! - logarithmic: 1.0 to 1.5
//! - linear: 1.8 to 2.2
//! - quadratic: 3.5 to 4.5
//!
//! Wall-clock timings of sub-microsecond work are noisy, so an "unexpected"
//! verdict is a prompt for discussion rather than a failure.

use std::fmt;

use crate::types::{ComplexityClass, ExperimentResult};

/// Outcome of comparing measured ratios with the expected band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The average ratio falls inside the expected band.
    Confirmed { average_ratio: f64 },
    /// The average ratio falls outside it.
    Unexpected { average_ratio: f64 },
    /// Fewer than two sizes were measured.
    Inconclusive,
}

impl Verdict {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Verdict::Confirmed { .. })
    }

    pub fn average_ratio(&self) -> Option<f64> {
        match *self {
            Verdict::Confirmed { average_ratio } | Verdict::Unexpected { average_ratio } => {
                Some(average_ratio)
            }
            Verdict::Inconclusive => None,
        }
    }
}

/// Band of acceptable average ratios; `min` is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBand {
    pub min: f64,
    pub max: f64,
    /// Whether `max` itself is outside the band.
    pub max_exclusive: bool,
}

impl RatioBand {
    pub fn for_class(class: ComplexityClass) -> Self {
        match class {
            ComplexityClass::Constant => RatioBand {
                min: f64::NEG_INFINITY,
                max: 1.5,
                max_exclusive: true,
            },
            ComplexityClass::Logarithmic => RatioBand {
                min: 1.0,
                max: 1.5,
                max_exclusive: false,
            },
            ComplexityClass::Linear => RatioBand {
                min: 1.8,
                max: 2.2,
                max_exclusive: false,
            },
            ComplexityClass::Quadratic => RatioBand {
                min: 3.5,
                max: 4.5,
                max_exclusive: false,
            },
        }
    }

    pub fn contains(&self, ratio: f64) -> bool {
        let below_max = if self.max_exclusive {
            ratio < self.max
        } else {
            ratio <= self.max
        };
        ratio >= self.min && below_max
    }
}

/// Mean of the defined ratios, skipping the first row. `None` with fewer
/// than two sizes.
pub fn average_ratio(result: &ExperimentResult) -> Option<f64> {
    let ratios: Vec<f64> = result.ratios().iter().flatten().copied().collect();
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Compare the average ratio of `result` with its algorithm's band.
pub fn check_scaling(result: &ExperimentResult) -> Verdict {
    let Some(average_ratio) = average_ratio(result) else {
        return Verdict::Inconclusive;
    };

    let band = RatioBand::for_class(result.algorithm().complexity_class());
    if band.contains(average_ratio) {
        Verdict::Confirmed { average_ratio }
    } else {
        Verdict::Unexpected { average_ratio }
    }
}

/// One-line explanation of a verdict, phrased for the learner.
pub fn verdict_message(class: ComplexityClass, verdict: Verdict) -> String {
    let (good, unexpected) = match class {
        ComplexityClass::Constant => (
            "Ratios close to 1.0 confirm constant time O(1)",
            "Ratios should be close to 1.0 for O(1)",
        ),
        ComplexityClass::Logarithmic => (
            "Small ratios confirm logarithmic time O(log n)",
            "Ratios should be small (1.0-1.5) for O(log n)",
        ),
        ComplexityClass::Linear => (
            "Ratios close to 2.0 confirm linear time O(n)",
            "Ratios should be close to 2.0 for O(n)",
        ),
        ComplexityClass::Quadratic => (
            "Ratios close to 4.0 confirm quadratic time O(n²)",
            "Ratios should be close to 4.0 for O(n²)",
        ),
    };

    match verdict {
        Verdict::Confirmed { .. } => format!("✓ GOOD: {}", good),
        Verdict::Unexpected { .. } => format!("? UNEXPECTED: {}", unexpected),
        Verdict::Inconclusive => "Not enough sizes to compare ratios".to_string(),
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Confirmed { average_ratio } => write!(f, "confirmed ({:.2})", average_ratio),
            Verdict::Unexpected { average_ratio } => write!(f, "unexpected ({:.2})", average_ratio),
            Verdict::Inconclusive => f.write_str("inconclusive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Algorithm;
    use std::time::Duration;

    fn result_with_times(algorithm: Algorithm, nanos: &[u64]) -> ExperimentResult {
        let mut result = ExperimentResult::new(algorithm);
        for (i, &n) in nanos.iter().enumerate() {
            result.record(100 << i, Duration::from_nanos(n), 0);
        }
        result
    }

    #[test]
    fn test_average_ratio_skips_first_row() {
        let result = result_with_times(Algorithm::LinearSearch, &[100, 200, 400, 800]);
        let avg = average_ratio(&result).unwrap();
        assert!((avg - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_size_is_inconclusive() {
        let result = result_with_times(Algorithm::LinearSearch, &[100]);
        assert_eq!(average_ratio(&result), None);
        assert_eq!(check_scaling(&result), Verdict::Inconclusive);
    }

    #[test]
    fn test_linear_confirmed() {
        let result = result_with_times(Algorithm::LinearSearch, &[1000, 2100, 4000]);
        assert!(check_scaling(&result).is_confirmed());
    }

    #[test]
    fn test_quadratic_unexpected_when_linear() {
        let result = result_with_times(Algorithm::FindAllPairs, &[1000, 2000, 4000]);
        let verdict = check_scaling(&result);
        assert!(!verdict.is_confirmed());
        assert!((verdict.average_ratio().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_band_upper_edge_is_exclusive() {
        let band = RatioBand::for_class(ComplexityClass::Constant);
        assert!(band.contains(0.4));
        assert!(band.contains(1.49));
        assert!(!band.contains(1.5));
    }

    #[test]
    fn test_logarithmic_band_is_inclusive() {
        let band = RatioBand::for_class(ComplexityClass::Logarithmic);
        assert!(band.contains(1.0));
        assert!(band.contains(1.5));
        assert!(!band.contains(0.9));
    }

    #[test]
    fn test_messages() {
        let good = verdict_message(
            ComplexityClass::Quadratic,
            Verdict::Confirmed { average_ratio: 4.0 },
        );
        assert!(good.starts_with("✓ GOOD"));
        let bad = verdict_message(
            ComplexityClass::Constant,
            Verdict::Unexpected { average_ratio: 3.0 },
        );
        assert_eq!(bad, "? UNEXPECTED: Ratios should be close to 1.0 for O(1)");
    }
}
