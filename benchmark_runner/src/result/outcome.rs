//!
//! The benchmark run outcome.
//!

use std::path::PathBuf;

use super::error_kind::ErrorKind;

///
/// The benchmark run outcome.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The executable exited with status 0.
    Success {
        /// The aligned output file passed to the executable.
        output: PathBuf,
        /// The captured standard output.
        stdout: String,
        /// The captured standard error.
        stderr: String,
    },
    /// The run failed.
    Failure {
        /// The failure kind.
        error_kind: ErrorKind,
        /// The failure description, never empty.
        error: String,
    },
}

impl Outcome {
    /// The description used when a failure comes without one.
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";

    ///
    /// A shortcut constructor.
    ///
    pub fn success(output: PathBuf, stdout: String, stderr: String) -> Self {
        assert!(
            !output.as_os_str().is_empty(),
            "A successful run must have an output path"
        );
        Self::Success {
            output,
            stdout,
            stderr,
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failure<S>(error_kind: ErrorKind, error: S) -> Self
    where
        S: ToString,
    {
        let mut error = error.to_string();
        if error.trim().is_empty() {
            error = Self::UNKNOWN_ERROR.to_owned();
        }
        Self::Failure { error_kind, error }
    }

    ///
    /// Whether the run has succeeded.
    ///
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
