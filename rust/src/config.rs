//! Experiment configuration: trial settings, size presets and size validation.
//!
//! Settings come from defaults, optionally overlaid by a TOML file, and
//! finally by command-line flags in the binary.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};

/// Minimum number of sizes in a custom list.
pub const MIN_CUSTOM_SIZES: usize = 3;
/// Smallest accepted custom size.
pub const MIN_SIZE: usize = 10;
/// Largest accepted custom size.
pub const MAX_SIZE: usize = 50_000;

/// Default number of timed trials per size.
pub const DEFAULT_TRIALS: usize = 3;
/// Default cap on the input size given to the quadratic algorithm.
pub const DEFAULT_PAIR_SIZE_CAP: usize = 200;

/// How the durations of a size's trials are combined into one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    #[default]
    Mean,
    Median,
}

impl FromStr for Statistic {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Statistic::Mean),
            "median" => Ok(Statistic::Median),
            other => Err(LabError::config("statistic", &format!("unknown '{}'", other))),
        }
    }
}

/// Settings for an experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub trials: usize,
    pub pair_size_cap: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub seed: Option<u64>,
    pub statistic: Statistic,
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            pair_size_cap: DEFAULT_PAIR_SIZE_CAP,
            min_value: *crate::data::DEFAULT_VALUE_RANGE.start(),
            max_value: *crate::data::DEFAULT_VALUE_RANGE.end(),
            seed: None,
            statistic: Statistic::Mean,
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExperimentConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> LabResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| LabError::config("TOML", &e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: &Path) -> LabResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| LabError::config(&path.display().to_string(), &e.to_string()))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> LabResult<()> {
        if self.trials == 0 {
            return Err(LabError::config("trials", "at least one trial is required"));
        }
        if self.pair_size_cap < 2 {
            return Err(LabError::config(
                "pair_size_cap",
                "must allow at least two elements",
            ));
        }
        if self.min_value > self.max_value {
            return Err(LabError::config(
                "value range",
                &format!("{} is greater than {}", self.min_value, self.max_value),
            ));
        }
        Ok(())
    }

    pub fn value_range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }
}

/// Built-in size series offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Small, SizePreset::Medium, SizePreset::Large];

    pub fn sizes(self) -> Vec<usize> {
        match self {
            SizePreset::Small => vec![100, 200, 400, 800],
            SizePreset::Medium => vec![500, 1000, 2000, 4000],
            SizePreset::Large => vec![1000, 2000, 4000, 8000],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self.sizes().iter().map(ToString::to_string).collect();
        write!(f, "{} test: {}", self.label(), sizes.join(", "))
    }
}

impl FromStr for SizePreset {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(SizePreset::Small),
            "medium" => Ok(SizePreset::Medium),
            "large" => Ok(SizePreset::Large),
            other => Err(LabError::invalid_choice(other, "small, medium or large")),
        }
    }
}

/// Check a custom size list and return it sorted ascending.
///
/// At least [`MIN_CUSTOM_SIZES`] sizes, each within `MIN_SIZE..=MAX_SIZE`.
pub fn validate_sizes(mut sizes: Vec<usize>) -> LabResult<Vec<usize>> {
    if sizes.len() < MIN_CUSTOM_SIZES {
        return Err(LabError::too_few_sizes(sizes.len(), MIN_CUSTOM_SIZES));
    }
    if let Some(&bad) = sizes.iter().find(|s| !(MIN_SIZE..=MAX_SIZE).contains(*s)) {
        return Err(LabError::size_out_of_range(bad, MIN_SIZE, MAX_SIZE));
    }
    sizes.sort_unstable();
    Ok(sizes)
}

/// Parse a comma separated list such as `"100, 200,400"` and validate it.
pub fn parse_custom_sizes(input: &str) -> LabResult<Vec<usize>> {
    let sizes = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<usize>().map_err(|_| {
                LabError::InvalidSizes(format!(
                    "'{}' is not a number; enter numbers separated by commas",
                    part
                ))
            })
        })
        .collect::<LabResult<Vec<_>>>()?;
    validate_sizes(sizes)
}
