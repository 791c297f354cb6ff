//!
//! The human-readable benchmark summary.
//!

use std::fmt::Write;

use crate::batch::result::BatchResult;
use crate::result::timestamp::Timestamp;

use super::metrics;

///
/// The human-readable benchmark summary.
///
/// Lists the failed datasets with their errors, then the successful ones with
/// the metric lines found in their output.
///
#[derive(Debug, Default)]
pub struct Text {
    /// The report text.
    pub content: String,
}

impl Text {
    /// The report title.
    pub const TITLE: &'static str = "BENCHMARK REPORT - MSA Aligner";

    /// The failed section heading.
    pub const FAILED_HEADING: &'static str = "FAILED BENCHMARKS:";

    /// The successful section heading.
    pub const SUCCESSFUL_HEADING: &'static str = "SUCCESSFUL BENCHMARKS:";

    ///
    /// Renders the report, stamping the header with `generated_at`.
    ///
    pub fn new(batch: &BatchResult, generated_at: Timestamp) -> Self {
        let mut content = String::new();
        Self::write_header(&mut content, batch, generated_at).expect("Always valid");
        Self::write_failed(&mut content, batch).expect("Always valid");
        Self::write_successful(&mut content, batch).expect("Always valid");
        Self { content }
    }

    fn write_header(
        content: &mut String,
        batch: &BatchResult,
        generated_at: Timestamp,
    ) -> std::fmt::Result {
        writeln!(content, "{}", Self::TITLE)?;
        writeln!(content, "{}", "=".repeat(50))?;
        writeln!(content)?;
        writeln!(content, "Date: {}", generated_at.to_human_string())?;
        writeln!(content, "Total benchmarks: {}", batch.results().len())?;
        writeln!(content, "Successful: {}", batch.successful().count())?;
        writeln!(content, "Failed: {}", batch.failed().count())?;
        writeln!(content)?;
        Ok(())
    }

    ///
    /// Writes nothing at all if there are no failures.
    ///
    fn write_failed(content: &mut String, batch: &BatchResult) -> std::fmt::Result {
        let mut failed = batch.failed().peekable();
        if failed.peek().is_none() {
            return Ok(());
        }

        writeln!(content, "{}", Self::FAILED_HEADING)?;
        writeln!(content, "{}", "-".repeat(20))?;
        for result in failed {
            // Keeps one line per failure even for multi-line stderr.
            let error = result
                .error()
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<&str>>()
                .join(" ");
            writeln!(content, "  {}: {error}", result.dataset_name())?;
        }
        writeln!(content)?;
        Ok(())
    }

    fn write_successful(content: &mut String, batch: &BatchResult) -> std::fmt::Result {
        writeln!(content, "{}", Self::SUCCESSFUL_HEADING)?;
        writeln!(content, "{}", "-".repeat(20))?;
        for result in batch.successful() {
            writeln!(content, "  {}", result.dataset_name())?;
            for line in metrics::extract(result.stdout().unwrap_or_default()) {
                writeln!(content, "    {line}")?;
            }
            writeln!(content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;

    use crate::batch::result::BatchResult;
    use crate::result::error_kind::ErrorKind;
    use crate::result::timestamp::Timestamp;
    use crate::result::BenchmarkResult;

    use super::Text;

    fn timestamp() -> Timestamp {
        Timestamp::from_str("20231201_120000").expect("Valid")
    }

    fn success(name: &str, stdout: &str) -> BenchmarkResult {
        BenchmarkResult::success(
            PathBuf::from("datasets/small").join(name),
            timestamp(),
            PathBuf::from("out").join(name),
            stdout.to_owned(),
            String::new(),
        )
    }

    #[test]
    fn no_failed_section_without_failures() {
        let batch = BatchResult::new(
            vec![success("a.fasta", "Tiempo total: 0.2s\n")],
            PathBuf::from("out"),
        );

        let text = Text::new(&batch, timestamp());

        assert!(!text.content.contains(Text::FAILED_HEADING));
        assert_eq!(
            text.content,
            "BENCHMARK REPORT - MSA Aligner\n\
             ==================================================\n\
             \n\
             Date: 2023-12-01 12:00:00\n\
             Total benchmarks: 1\n\
             Successful: 1\n\
             Failed: 0\n\
             \n\
             SUCCESSFUL BENCHMARKS:\n\
             --------------------\n\
             \x20 a.fasta\n\
             \x20   Tiempo total: 0.2s\n\
             \n"
        );
    }

    #[test]
    fn one_line_per_failure() {
        let batch = BatchResult::new(
            vec![
                BenchmarkResult::failure(
                    "x/b.fasta".into(),
                    timestamp(),
                    ErrorKind::NonZeroExit,
                    "Error: Invalid input\n  at line 3",
                ),
                BenchmarkResult::failure("x/c.fasta".into(), timestamp(), ErrorKind::Timeout, "Timeout"),
                success("a.fasta", "no metrics here"),
            ],
            PathBuf::from("out"),
        );

        let text = Text::new(&batch, timestamp());

        let failed_section: Vec<&str> = text
            .content
            .lines()
            .skip_while(|line| *line != Text::FAILED_HEADING)
            .skip(2)
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(
            failed_section,
            vec!["  b.fasta: Error: Invalid input at line 3", "  c.fasta: Timeout"]
        );
        assert!(text.content.contains("  a.fasta\n\n"));
    }
}
