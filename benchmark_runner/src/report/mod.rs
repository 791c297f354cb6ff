//!
//! The benchmark report set.
//!

pub mod csv;
pub mod file;
pub mod json;
pub mod metrics;
pub mod paths;
pub mod text;

use std::path::Path;

use crate::batch::result::BatchResult;
use crate::result::timestamp::Timestamp;

use self::csv::Csv;
use self::file::File;
use self::json::Json;
use self::paths::Paths;
use self::text::Text;

///
/// The text, CSV, and JSON reports of one batch.
///
/// All three are rendered from the same results before anything is written.
///
#[derive(Debug)]
pub struct Report {
    /// The human-readable summary.
    pub text: Text,
    /// The CSV table.
    pub csv: Csv,
    /// The JSON dump.
    pub json: Json,
}

impl Report {
    /// The summary file name.
    pub const TEXT_FILE_NAME: &'static str = "benchmark_summary.txt";

    /// The CSV file name.
    pub const CSV_FILE_NAME: &'static str = "benchmark_results.csv";

    /// The JSON file name.
    pub const JSON_FILE_NAME: &'static str = "benchmark_results.json";

    ///
    /// Renders the reports of `batch`, stamping the summary with `generated_at`.
    ///
    pub fn new(batch: &BatchResult, generated_at: Timestamp) -> anyhow::Result<Self> {
        Ok(Self {
            text: Text::new(batch, generated_at),
            csv: Csv::from(batch),
            json: Json::try_from(batch)?,
        })
    }

    ///
    /// Renders the reports of `batch` and writes them into its output directory.
    ///
    /// Existing reports in that directory are overwritten.
    ///
    pub fn generate(batch: &BatchResult) -> anyhow::Result<Paths> {
        Self::new(batch, Timestamp::now())?.write_to_directory(batch.output_directory())
    }

    ///
    /// Writes the reports into `directory`.
    ///
    pub fn write_to_directory(self, directory: &Path) -> anyhow::Result<Paths> {
        let files = [
            File::new(Self::TEXT_FILE_NAME, self.text.content),
            File::new(Self::CSV_FILE_NAME, self.csv.content),
            File::new(Self::JSON_FILE_NAME, self.json.content),
        ];

        std::fs::create_dir_all(directory)
            .map_err(|error| anyhow::anyhow!("Report directory {directory:?} creating: {error}"))?;
        for File {
            path: relative_path,
            contents,
        } in files
        {
            let file_path = directory.join(relative_path);
            std::fs::write(file_path.as_path(), contents).map_err(|error| {
                anyhow::anyhow!("Report file {file_path:?} writing: {error}")
            })?;
        }

        Ok(Paths {
            text: directory.join(Self::TEXT_FILE_NAME),
            csv: directory.join(Self::CSV_FILE_NAME),
            json: directory.join(Self::JSON_FILE_NAME),
        })
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

    use super::Report;

    fn batch(directory: PathBuf) -> BatchResult {
        let timestamp = Timestamp::from_str("20231201_120000").expect("Valid");
        BatchResult::new(
            vec![
                BenchmarkResult::success(
                    "datasets/small/a.fasta".into(),
                    timestamp,
                    directory.join("a_aligned.fasta"),
                    "Tiempo total: 1.5s\n".to_owned(),
                    String::new(),
                ),
                BenchmarkResult::failure(
                    "datasets/small/b,odd.fasta".into(),
                    timestamp,
                    ErrorKind::SpawnFailure,
                    "No such file or directory",
                ),
                BenchmarkResult::failure(
                    "datasets/large/c.fasta".into(),
                    timestamp,
                    ErrorKind::Timeout,
                    "Timeout",
                ),
            ],
            directory,
        )
    }

    #[test]
    fn csv_rows_follow_batch_order() {
        let batch = batch(PathBuf::from("out"));
        let report = Report::new(&batch, Timestamp::now()).expect("Always valid");

        let lines: Vec<&str> = report.csv.content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Dataset,Success,Timestamp,Output_File,Error",
                "a.fasta,True,20231201_120000,out/a_aligned.fasta,",
                "\"b,odd.fasta\",False,20231201_120000,,No such file or directory",
                "c.fasta,False,20231201_120000,,Timeout",
            ]
        );
    }

    #[test]
    fn json_matches_results() {
        let batch = batch(PathBuf::from("out"));
        let report = Report::new(&batch, Timestamp::now()).expect("Always valid");

        let json: serde_json::Value =
            serde_json::from_str(report.json.content.as_str()).expect("Valid JSON");
        let records = json.as_array().expect("Array");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["dataset"], "datasets/small/a.fasta");
        assert_eq!(records[0]["outcome"], "success");
        assert_eq!(records[0]["success"], true);
        assert_eq!(records[0]["output"], "out/a_aligned.fasta");
        assert_eq!(records[0]["stdout"], "Tiempo total: 1.5s\n");
        assert!(records[0].get("error").is_none());
        assert_eq!(records[1]["outcome"], "failure");
        assert_eq!(records[1]["error_kind"], "spawn_failure");
        assert_eq!(records[2]["error_kind"], "timeout");
        assert_eq!(records[2]["error"], "Timeout");
        assert_eq!(records[2]["timestamp"], "20231201_120000");
        assert!(records[2].get("output").is_none());
    }

    #[test]
    fn writes_and_overwrites_report_set() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let batch = batch(directory.path().to_path_buf());

        let first = Report::generate(&batch).expect("Always valid");
        let second = Report::generate(&batch).expect("Always valid");

        assert_eq!(first, second);
        assert_eq!(first.text, directory.path().join(Report::TEXT_FILE_NAME));
        for path in [first.text, first.csv, first.json] {
            assert!(path.is_file(), "{path:?} is missing");
        }
        assert_eq!(std::fs::read_dir(directory.path()).expect("Listing").count(), 3);
    }

    #[test]
    fn unwritable_directory_fails() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let blocker = directory.path().join("blocker");
        std::fs::write(&blocker, "").expect("File writing");
        let batch = batch(blocker.join("nested"));

        let error = Report::generate(&batch).expect_err("Must fail");
        assert!(error.to_string().contains("creating"));
    }
}
