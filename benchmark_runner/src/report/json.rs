//!
//! Serializing batch results to JSON.
//!

use std::path::Path;

use crate::batch::result::BatchResult;
use crate::result::outcome::Outcome;
use crate::result::timestamp::Timestamp;
use crate::result::BenchmarkResult;

///
/// A single result, as it appears in the JSON array.
///
#[derive(Debug, serde::Serialize)]
struct Record<'a> {
    /// The dataset path, as given.
    dataset: &'a Path,
    /// Whether the run has succeeded.
    success: bool,
    /// The run timestamp.
    timestamp: Timestamp,
    /// The outcome discriminator and its fields.
    #[serde(flatten)]
    outcome: &'a Outcome,
}

impl<'a> From<&'a BenchmarkResult> for Record<'a> {
    fn from(result: &'a BenchmarkResult) -> Self {
        Self {
            dataset: result.dataset(),
            success: result.is_success(),
            timestamp: result.timestamp(),
            outcome: result.outcome(),
        }
    }
}

///
/// The batch results as a pretty-printed JSON array, in batch order.
///
#[derive(Debug, Default)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl TryFrom<&BatchResult> for Json {
    type Error = anyhow::Error;

    fn try_from(batch: &BatchResult) -> Result<Self, Self::Error> {
        let records: Vec<Record> = batch.results().iter().map(Record::from).collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|error| anyhow::anyhow!("Benchmark results JSON serializing: {error}"))?;
        Ok(Self { content })
    }
}
