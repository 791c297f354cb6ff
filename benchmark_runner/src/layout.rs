//!
//! The benchmark directory layout.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The benchmark directory layout.
///
/// Inputs live in `<root>/datasets/<category>/*.<extension>`, reports are
/// written under `<root>/results/`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// The benchmark root directory.
    pub root: PathBuf,
    /// The dataset file extension, without the leading dot.
    pub extension: String,
}

impl Layout {
    /// The default benchmark root directory.
    pub const DEFAULT_ROOT: &'static str = "benchmarks";

    /// The default dataset file extension.
    pub const DEFAULT_EXTENSION: &'static str = "fasta";

    /// The dataset directory name.
    pub const DATASETS_DIRECTORY: &'static str = "datasets";

    /// The results directory name.
    pub const RESULTS_DIRECTORY: &'static str = "results";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: Self::DEFAULT_EXTENSION.to_owned(),
        }
    }

    ///
    /// Returns the directory containing the dataset categories.
    ///
    pub fn datasets_directory(&self) -> PathBuf {
        self.root.join(Self::DATASETS_DIRECTORY)
    }

    ///
    /// Returns the default output root for batches.
    ///
    pub fn results_directory(&self) -> PathBuf {
        self.root.join(Self::RESULTS_DIRECTORY)
    }

    ///
    /// Creates the results directory if it does not exist yet.
    ///
    pub fn create_results_directory(&self) -> anyhow::Result<PathBuf> {
        let path = self.results_directory();
        std::fs::create_dir_all(path.as_path()).map_err(|error| {
            anyhow::anyhow!("Results directory {path:?} creating: {error}")
        })?;
        Ok(path)
    }

    ///
    /// Whether the path has the dataset extension.
    ///
    pub fn is_dataset(&self, path: &Path) -> bool {
        path.extension()
            .map(|extension| extension == self.extension.as_str())
            .unwrap_or_default()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_ROOT))
    }
}
