//!
//! The benchmark run timestamp.
//!

use chrono::Local;
use chrono::NaiveDateTime;

///
/// The local time a benchmark run or batch was started at.
///
/// Rendered as `YYYYMMDD_HHMMSS`, which is also used in output file names.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The file-name-friendly format.
    pub const FORMAT: &'static str = "%Y%m%d_%H%M%S";

    /// The human-readable format used in the text report header.
    pub const HUMAN_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    ///
    /// Captures the current local time.
    ///
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    ///
    /// Formats the timestamp for humans.
    ///
    pub fn to_human_string(&self) -> String {
        self.0.format(Self::HUMAN_FORMAT).to_string()
    }
}

impl std::str::FromStr for Timestamp {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(string, Self::FORMAT)
            .map(Self)
            .map_err(|error| anyhow::anyhow!("Timestamp `{string}` parsing: {error}"))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
