//!
//! Serializing batch results to CSV.
//!

use std::borrow::Cow;
use std::fmt::Write;

use crate::batch::result::BatchResult;

///
/// Serialize the batch to CSV in the following format:
/// "Dataset", "Success", "Timestamp", "Output_File", "Error"
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header row.
    pub const HEADER: [&'static str; 5] = ["Dataset", "Success", "Timestamp", "Output_File", "Error"];

    /// The estimated length of a row.
    const ESTIMATED_LINE_LENGTH: usize = 160;

    ///
    /// Quotes a field if it contains a separator, a quote, or a line break.
    ///
    fn field(value: &str) -> Cow<'_, str> {
        if value.contains([',', '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl From<&BatchResult> for Csv {
    fn from(batch: &BatchResult) -> Self {
        let mut content =
            String::with_capacity((batch.results().len() + 1) * Self::ESTIMATED_LINE_LENGTH);
        content.push_str(Self::HEADER.join(",").as_str());
        content.push('\n');

        for result in batch.results().iter() {
            let dataset = result.dataset_name();
            let success = if result.is_success() { "True" } else { "False" };
            let output = result
                .output()
                .map(|path| path.to_string_lossy())
                .unwrap_or_default();
            let error = result.error().unwrap_or_default();

            writeln!(
                &mut content,
                "{},{success},{},{},{}",
                Self::field(dataset.as_str()),
                result.timestamp(),
                Self::field(output.as_ref()),
                Self::field(error),
            )
            .expect("Always valid");
        }

        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::Csv;

    #[test]
    fn quotes_special_fields() {
        assert_eq!(Csv::field("plain"), "plain");
        assert_eq!(Csv::field("a,b"), "\"a,b\"");
        assert_eq!(Csv::field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(Csv::field("two\nlines"), "\"two\nlines\"");
    }
}
