//! Timing experiments for four textbook algorithms, one per complexity class.
//!
//! A learner picks an algorithm and a series of input sizes; the runner times
//! the algorithm on random data at each size, and the reporter prints how the
//! time grew from one size to the next, alongside what the Big-O class predicts.
//!
//! ```
//! use complexity_lab::{analysis, Algorithm, ExperimentConfig, ExperimentRunner};
//!
//! let config = ExperimentConfig { seed: Some(1), ..ExperimentConfig::default() };
//! let mut runner = ExperimentRunner::new(config).unwrap();
//! let result = runner.run_experiment(Algorithm::LinearSearch, &[100, 200, 400]);
//!
//! assert_eq!(result.len(), 3);
//! let _verdict = analysis::check_scaling(&result);
//! ```

pub mod algorithms;
pub mod analysis;
pub mod chart;
pub mod config;
pub mod data;
mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod session;
mod types;

pub use analysis::Verdict;
pub use chart::ChartOutput;
pub use config::{ExperimentConfig, SizePreset, Statistic};
pub use data::DataGenerator;
pub use error::{LabError, LabResult, LabResultExt};
pub use runner::{ExperimentRunner, TrialSummary};
pub use session::{Mode, Outcome, Session};
pub use types::{Algorithm, AlgorithmDescription, ComplexityClass, ExperimentResult};
