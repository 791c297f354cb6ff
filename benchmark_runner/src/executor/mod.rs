//!
//! The benchmark executor.
//!

pub mod capture;
pub mod error;

use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use crate::result::error_kind::ErrorKind;
use crate::result::outcome::Outcome;
use crate::result::timestamp::Timestamp;
use crate::result::BenchmarkResult;

use self::capture::Capture;
use self::error::Error;

///
/// The way the executable process has ended.
///
#[derive(Debug)]
enum Completion {
    /// The process has exited on its own.
    Exited {
        /// The exit status.
        status: ExitStatus,
        /// The captured standard output.
        stdout: String,
        /// The captured standard error.
        stderr: String,
    },
    /// The process has been killed after running out of time.
    TimedOut,
}

///
/// Runs the aligner executable on one dataset at a time.
///
#[derive(Debug, Clone)]
pub struct Executor {
    /// The aligner executable path.
    executable: PathBuf,
    /// The maximum run duration.
    timeout: Duration,
    /// The output file extension.
    extension: String,
}

impl Executor {
    /// The default run timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// The initial process status polling interval.
    const POLL_INTERVAL_MIN: Duration = Duration::from_millis(1);

    /// The longest process status polling interval.
    const POLL_INTERVAL_MAX: Duration = Duration::from_millis(50);

    /// The failure description of a timed out run.
    pub const TIMEOUT_MESSAGE: &'static str = "Timeout";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf, timeout: Duration, extension: String) -> Self {
        Self {
            executable,
            timeout,
            extension,
        }
    }

    ///
    /// Runs the executable as `<executable> <dataset> <output>`, where the output
    /// file is placed in `output_directory`.
    ///
    /// Every failure is recorded in the result. A timed out process is killed
    /// and reaped before returning.
    ///
    pub fn run(&self, dataset: &Path, output_directory: &Path) -> BenchmarkResult {
        let timestamp = Timestamp::now();
        let output = self.output_path(dataset, output_directory, timestamp);

        let outcome = match self.invoke(dataset, output.as_path()) {
            Ok(Completion::Exited {
                status,
                stdout,
                stderr,
            }) if status.success() => Outcome::success(output, stdout, stderr),
            Ok(Completion::Exited { status, stderr, .. }) => {
                let error = if stderr.trim().is_empty() {
                    format!("Process exited with {status}")
                } else {
                    stderr.trim_end().to_owned()
                };
                Outcome::failure(ErrorKind::NonZeroExit, error)
            }
            Ok(Completion::TimedOut) => {
                Outcome::failure(ErrorKind::Timeout, Self::TIMEOUT_MESSAGE)
            }
            Err(error) => Outcome::failure(ErrorKind::SpawnFailure, error),
        };

        BenchmarkResult::new(dataset.to_path_buf(), outcome, timestamp)
    }

    ///
    /// Returns the output file path: `<stem>_aligned_<timestamp>.<extension>`.
    ///
    /// If that file already exists, e.g. for a same-named dataset of another
    /// category run within the same second, a `_<n>` counter is appended.
    ///
    pub fn output_path(
        &self,
        dataset: &Path,
        output_directory: &Path,
        timestamp: Timestamp,
    ) -> PathBuf {
        let stem = dataset
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_owned());
        let mut path =
            output_directory.join(format!("{stem}_aligned_{timestamp}.{}", self.extension));
        let mut counter = 1;
        while path.exists() {
            path = output_directory.join(format!(
                "{stem}_aligned_{timestamp}_{counter}.{}",
                self.extension
            ));
            counter += 1;
        }
        path
    }

    ///
    /// Spawns the process and waits for it within the timeout.
    ///
    fn invoke(&self, dataset: &Path, output: &Path) -> Result<Completion, Error> {
        let mut child = Command::new(self.executable.as_path())
            .arg(dataset)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| Error::Spawning {
                error,
                executable: self.executable.clone(),
            })?;

        let deadline = Instant::now() + self.timeout;
        let stdout = Capture::start("stdout", child.stdout.take());
        let stderr = Capture::start("stderr", child.stderr.take());

        match self.wait(&mut child, deadline) {
            Ok(Some(status)) => {
                // Both pipes share the deadline of the process itself.
                match (stdout.finish(deadline)?, stderr.finish(deadline)?) {
                    (Some(stdout), Some(stderr)) => Ok(Completion::Exited {
                        status,
                        stdout,
                        stderr,
                    }),
                    _ => Ok(Completion::TimedOut),
                }
            }
            Ok(None) => {
                // The reader threads are left to finish on their own, since
                // grandchildren may still hold the pipes open.
                self.terminate(&mut child)?;
                Ok(Completion::TimedOut)
            }
            Err(error) => {
                let _ = self.terminate(&mut child);
                Err(error)
            }
        }
    }

    ///
    /// Waits for the process to exit, returning `None` once `deadline` passes.
    ///
    fn wait(&self, child: &mut Child, deadline: Instant) -> Result<Option<ExitStatus>, Error> {
        let mut interval = Self::POLL_INTERVAL_MIN;
        loop {
            if let Some(status) = child.try_wait().map_err(|error| Error::Waiting {
                error,
                executable: self.executable.clone(),
            })? {
                return Ok(Some(status));
            }

            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            std::thread::sleep(interval.min(deadline - now));
            interval = (interval * 2).min(Self::POLL_INTERVAL_MAX);
        }
    }

    ///
    /// Kills the process and reaps it.
    ///
    fn terminate(&self, child: &mut Child) -> Result<(), Error> {
        // Fails only if the process has already exited, which `wait` handles.
        let _ = child.kill();
        child.wait().map_err(|error| Error::Killing {
            error,
            executable: self.executable.clone(),
        })?;
        Ok(())
    }
}
