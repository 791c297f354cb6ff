//!
//! The benchmark batch result.
//!

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::result::error_kind::ErrorKind;
use crate::result::BenchmarkResult;

///
/// The results of a batch, in dataset order, and the directory they belong to.
///
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// The results in the order the datasets were given.
    results: Vec<BenchmarkResult>,
    /// The batch output directory.
    output_directory: PathBuf,
}

impl BatchResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(results: Vec<BenchmarkResult>, output_directory: PathBuf) -> Self {
        Self {
            results,
            output_directory,
        }
    }

    ///
    /// Returns the results in dataset order.
    ///
    pub fn results(&self) -> &[BenchmarkResult] {
        self.results.as_slice()
    }

    ///
    /// Returns the batch output directory.
    ///
    pub fn output_directory(&self) -> &Path {
        self.output_directory.as_path()
    }

    ///
    /// Returns the successful results in dataset order.
    ///
    pub fn successful(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(|result| result.is_success())
    }

    ///
    /// Returns the failed results in dataset order.
    ///
    pub fn failed(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(|result| !result.is_success())
    }

    ///
    /// Whether every run has succeeded.
    ///
    pub fn is_successful(&self) -> bool {
        self.results.iter().all(BenchmarkResult::is_success)
    }

    ///
    /// Counts the failures of the given kind.
    ///
    fn count_kind(&self, kind: ErrorKind) -> usize {
        self.results
            .iter()
            .filter(|result| result.error_kind() == Some(kind))
            .count()
    }
}

impl std::fmt::Display for BatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let passed = self.successful().count();
        let failed = self.count_kind(ErrorKind::NonZeroExit);
        let timeout = self.count_kind(ErrorKind::Timeout);
        let invalid = self.count_kind(ErrorKind::SpawnFailure);

        writeln!(
            f,
            "╔════════════════════╡ ALIGNER BENCHMARKS ╞════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "TIMEOUT".yellow(),
            timeout.to_string().yellow(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "INVALID".red(),
            invalid.to_string().red(),
        )?;
        writeln!(
            f,
            "║               {:10} DATASETS                            ║",
            self.results.len(),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::result::error_kind::ErrorKind;
    use crate::result::timestamp::Timestamp;
    use crate::result::BenchmarkResult;

    use super::BatchResult;

    #[test]
    fn partitions_preserving_order() {
        let timestamp = Timestamp::now();
        let results = vec![
            BenchmarkResult::failure("a.fasta".into(), timestamp, ErrorKind::Timeout, "Timeout"),
            BenchmarkResult::success(
                "b.fasta".into(),
                timestamp,
                "out/b.fasta".into(),
                String::new(),
                String::new(),
            ),
            BenchmarkResult::failure("c.fasta".into(), timestamp, ErrorKind::NonZeroExit, "boom"),
        ];
        let batch = BatchResult::new(results, PathBuf::from("out"));

        let failed: Vec<String> = batch.failed().map(BenchmarkResult::dataset_name).collect();
        assert_eq!(failed, vec!["a.fasta", "c.fasta"]);
        assert_eq!(batch.successful().count(), 1);
        assert!(!batch.is_successful());
        assert!(batch.to_string().contains("DATASETS"));
    }
}
