//!
//! The benchmark run failure kind.
//!

///
/// The benchmark run failure kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The executable did not finish in time and was killed.
    Timeout,
    /// The executable exited with a non-zero status.
    NonZeroExit,
    /// The executable could not be started or its output could not be collected.
    SpawnFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::NonZeroExit => write!(f, "non-zero exit"),
            Self::SpawnFailure => write!(f, "spawn failure"),
        }
    }
}
