//!
//! The benchmark batch orchestrator.
//!

pub mod result;

use std::path::PathBuf;

use colored::Colorize;

use crate::executor::Executor;
use crate::result::error_kind::ErrorKind;
use crate::result::outcome::Outcome;
use crate::result::timestamp::Timestamp;
use crate::result::BenchmarkResult;

use self::result::BatchResult;

///
/// Runs the executor over a list of datasets, one at a time.
///
#[derive(Debug, Clone)]
pub struct Batch {
    /// The per-dataset executor.
    executor: Executor,
    /// The root under which fresh batch directories are created.
    results_directory: PathBuf,
    /// Whether failure details are printed in full.
    verbosity: bool,
    /// Whether the progress output is suppressed.
    quiet: bool,
}

impl Batch {
    /// The prefix of the generated batch directory names.
    pub const DIRECTORY_PREFIX: &'static str = "batch_";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        executor: Executor,
        results_directory: PathBuf,
        verbosity: bool,
        quiet: bool,
    ) -> Self {
        Self {
            executor,
            results_directory,
            verbosity,
            quiet,
        }
    }

    ///
    /// Runs every dataset in order and collects the results in the same order.
    ///
    /// If `output_directory` is `None`, a fresh `batch_<timestamp>` directory is
    /// created under the results root. A failing dataset never stops the batch.
    ///
    pub fn run(
        &self,
        datasets: &[PathBuf],
        output_directory: Option<PathBuf>,
    ) -> anyhow::Result<BatchResult> {
        let output_directory = match output_directory {
            Some(path) => path,
            None => self
                .results_directory
                .join(format!("{}{}", Self::DIRECTORY_PREFIX, Timestamp::now())),
        };
        std::fs::create_dir_all(output_directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Batch directory {output_directory:?} creating: {error}")
        })?;

        if !self.quiet {
            println!(
                "     {} {} benchmarks into {}",
                "Running".bright_green().bold(),
                datasets.len(),
                output_directory.display(),
            );
        }

        let mut results = Vec::with_capacity(datasets.len());
        for (index, dataset) in datasets.iter().enumerate() {
            let result = self.executor.run(dataset.as_path(), output_directory.as_path());
            self.print_result(index + 1, datasets.len(), &result);
            results.push(result);
        }

        Ok(BatchResult::new(results, output_directory))
    }

    ///
    /// Prints a single result line.
    ///
    fn print_result(&self, number: usize, total: usize, result: &BenchmarkResult) {
        if self.quiet {
            return;
        }

        let progress = format!("[{number}/{total}]");
        let (outcome, details) = match result.outcome() {
            Outcome::Success { output, .. } => {
                ("PASSED".green(), format!("-> {}", output.display()))
            }
            Outcome::Failure { error_kind, error } => {
                let outcome = match error_kind {
                    ErrorKind::NonZeroExit => "FAILED".bright_red(),
                    ErrorKind::Timeout => "TIMEOUT".yellow(),
                    ErrorKind::SpawnFailure => "INVALID".red(),
                };
                let details = if self.verbosity {
                    error.to_owned()
                } else {
                    error.lines().next().unwrap_or_default().to_owned()
                };
                (outcome, format!("({details})"))
            }
        };

        println!(
            "{:>12} {:>7} {} {}",
            progress.bright_white(),
            outcome,
            result.dataset_name(),
            details,
        );
    }
}
