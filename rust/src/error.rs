//! Error handling and result types for complexity experiments.
//!
//! Invalid menu input and invalid size lists are the only conditions the
//! interactive front end recovers from (it re-prompts). Everything else
//! propagates to the binary, which reports it and exits non-zero.

use thiserror::Error;

/// Error type for experiment, reporting and configuration operations.
#[derive(Error, Debug)]
pub enum LabError {
    /// An algorithm name that is not one of the four known algorithms.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    /// A menu selection outside the offered choices.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    /// A size list that cannot be used for an experiment.
    #[error("Invalid sizes: {0}")]
    InvalidSizes(String),
    /// Configuration that failed to parse or validate.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Chart rendering failed.
    #[error("Chart error: {0}")]
    Chart(String),
    /// Input ended while a prompt was waiting for an answer.
    #[error("Input closed before a selection was made")]
    InputClosed,
    /// Reading input or writing a report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabError {
    /// Create an InvalidSizes error for a size outside the accepted range
    pub fn size_out_of_range(size: usize, min: usize, max: usize) -> Self {
        Self::InvalidSizes(format!(
            "Size {} is out of range (expected {} to {})",
            size, min, max
        ))
    }

    /// Create an InvalidSizes error for a list that is too short
    pub fn too_few_sizes(count: usize, min_required: usize) -> Self {
        Self::InvalidSizes(format!(
            "{} sizes given (minimum required: {})",
            count, min_required
        ))
    }

    /// Create an InvalidChoice error listing what would have been accepted
    pub fn invalid_choice(input: &str, accepted: &str) -> Self {
        Self::InvalidChoice(format!("'{}' (expected {})", input, accepted))
    }

    /// Create a Config error with context
    pub fn config(context: &str, details: &str) -> Self {
        Self::Config(format!("{}: {}", context, details))
    }

    /// Check if this error should lead to a re-prompt rather than an abort
    pub fn is_recoverable_input(&self) -> bool {
        matches!(self, Self::InvalidChoice(_) | Self::InvalidSizes(_))
    }

    /// Check if this error is a size validation error
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::InvalidSizes(_))
    }
}

/// Result type for experiment operations
pub type LabResult<T> = Result<T, LabError>;

/// Result extension trait for attaching context to errors
pub trait LabResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> LabResult<T>;
}

impl<T> LabResultExt<T> for LabResult<T> {
    fn with_context(self, context: &str) -> LabResult<T> {
        self.map_err(|e| match e {
            LabError::UnknownAlgorithm(msg) => {
                LabError::UnknownAlgorithm(format!("{}: {}", context, msg))
            }
            LabError::InvalidChoice(msg) => LabError::InvalidChoice(format!("{}: {}", context, msg)),
            LabError::InvalidSizes(msg) => LabError::InvalidSizes(format!("{}: {}", context, msg)),
            LabError::Config(msg) => LabError::config(context, &msg),
            LabError::Chart(msg) => LabError::Chart(format!("{}: {}", context, msg)),
            LabError::Io(err) => LabError::Io(std::io::Error::new(
                err.kind(),
                format!("{}: {}", context, err),
            )),
            other => other,
        })
    }
}
