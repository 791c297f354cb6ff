//!
//! Represents a single report file in a report set.
//!

use std::path::PathBuf;

///
/// Represents a single report file in a report set.
///
#[derive(Debug)]
pub struct File {
    /// Path to this file relative to the batch output directory.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<P>(path: P, contents: String) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            contents,
        }
    }
}
