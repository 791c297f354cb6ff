//!
//! The executable invocation error.
//!

use std::path::PathBuf;

///
/// The executable invocation error.
///
/// Never leaves the executor: it is recorded as a spawn failure instead.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process could not be started.
    #[error("Executable {executable:?} spawning: {error}")]
    Spawning {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// The process status could not be queried.
    #[error("Executable {executable:?} waiting: {error}")]
    Waiting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// The process could not be killed after the timeout.
    #[error("Executable {executable:?} killing: {error}")]
    Killing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: PathBuf,
    },
    /// One of the output streams could not be read.
    #[error("Executable {stream} reading: {error}")]
    Capturing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The stream name.
        stream: &'static str,
    },
    /// The thread reading one of the output streams has panicked.
    #[error("Executable {stream} reader thread panicked")]
    CapturePanicked {
        /// The stream name.
        stream: &'static str,
    },
}
