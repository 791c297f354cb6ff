//!
//! The paths of a written report set.
//!

use std::path::PathBuf;

///
/// The paths of a written report set.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The human-readable summary.
    pub text: PathBuf,
    /// The CSV table.
    pub csv: PathBuf,
    /// The JSON dump.
    pub json: PathBuf,
}
