//!
//! The result of a single benchmark run.
//!

pub mod error_kind;
pub mod outcome;
pub mod timestamp;

use std::path::Path;
use std::path::PathBuf;

use self::error_kind::ErrorKind;
use self::outcome::Outcome;
use self::timestamp::Timestamp;

///
/// The result of a single benchmark run.
///
/// Immutable once constructed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// The dataset path.
    dataset: PathBuf,
    /// The run outcome.
    outcome: Outcome,
    /// The time the run was started at.
    timestamp: Timestamp,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(dataset: PathBuf, outcome: Outcome, timestamp: Timestamp) -> Self {
        Self {
            dataset,
            outcome,
            timestamp,
        }
    }

    ///
    /// A shortcut constructor for a successful run.
    ///
    pub fn success(
        dataset: PathBuf,
        timestamp: Timestamp,
        output: PathBuf,
        stdout: String,
        stderr: String,
    ) -> Self {
        Self::new(dataset, Outcome::success(output, stdout, stderr), timestamp)
    }

    ///
    /// A shortcut constructor for a failed run.
    ///
    pub fn failure<S>(
        dataset: PathBuf,
        timestamp: Timestamp,
        error_kind: ErrorKind,
        error: S,
    ) -> Self
    where
        S: ToString,
    {
        Self::new(dataset, Outcome::failure(error_kind, error), timestamp)
    }

    ///
    /// Returns the dataset path.
    ///
    pub fn dataset(&self) -> &Path {
        self.dataset.as_path()
    }

    ///
    /// Returns the dataset file name, or the whole path if it has none.
    ///
    pub fn dataset_name(&self) -> String {
        self.dataset
            .file_name()
            .unwrap_or(self.dataset.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    ///
    /// Returns the run outcome.
    ///
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    ///
    /// Returns the run timestamp.
    ///
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    ///
    /// Whether the run has succeeded.
    ///
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    ///
    /// Returns the output file path, if the run has succeeded.
    ///
    pub fn output(&self) -> Option<&Path> {
        match self.outcome {
            Outcome::Success { ref output, .. } => Some(output.as_path()),
            Outcome::Failure { .. } => None,
        }
    }

    ///
    /// Returns the captured standard output, if the run has succeeded.
    ///
    pub fn stdout(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Success { ref stdout, .. } => Some(stdout.as_str()),
            Outcome::Failure { .. } => None,
        }
    }

    ///
    /// Returns the failure description, if the run has failed.
    ///
    pub fn error(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { ref error, .. } => Some(error.as_str()),
        }
    }

    ///
    /// Returns the failure kind, if the run has failed.
    ///
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { error_kind, .. } => Some(error_kind),
        }
    }
}
