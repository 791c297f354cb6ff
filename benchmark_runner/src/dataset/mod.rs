//!
//! The dataset locator.
//!

pub mod category;

use std::path::PathBuf;

use crate::layout::Layout;

use self::category::Category;

///
/// Finds the dataset files of the benchmark layout.
///
#[derive(Debug, Clone)]
pub struct Locator {
    /// The benchmark directory layout.
    layout: Layout,
}

impl Locator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    ///
    /// Finds the datasets of a single category, or of all categories if `None`.
    ///
    /// Missing category directories yield no datasets.
    ///
    pub fn find(&self, category: Option<Category>) -> anyhow::Result<Vec<PathBuf>> {
        match category {
            Some(category) => self.find_in(category.as_str()),
            None => {
                let mut datasets = Vec::new();
                for category in Category::all().into_iter() {
                    datasets.extend(self.find_in(category.as_str())?);
                }
                Ok(datasets)
            }
        }
    }

    ///
    /// Finds the datasets in the category directory `name`.
    ///
    /// The paths are sorted, so repeated runs see the same order.
    ///
    pub fn find_in(&self, name: &str) -> anyhow::Result<Vec<PathBuf>> {
        let directory = self.layout.datasets_directory().join(name);
        if !directory.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(directory.to_string_lossy().as_ref()),
            self.layout.extension
        );
        let mut datasets: Vec<PathBuf> = glob::glob(pattern.as_str())
            .map_err(|error| anyhow::anyhow!("Dataset pattern `{pattern}` parsing: {error}"))?
            .filter_map(Result::ok)
            .filter(|path| path.is_file() && self.layout.is_dataset(path.as_path()))
            .collect();
        datasets.sort();
        Ok(datasets)
    }
}
