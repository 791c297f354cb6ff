//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The datasets to benchmark, or one of the placeholder modes.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Create synthetic datasets of the given sizes.
    Synthetic(Vec<usize>),
    /// Run the scalability test.
    Scalability,
    /// Run a single dataset.
    Dataset(PathBuf),
    /// Run every dataset of a category.
    Category(benchmark_runner::Category),
    /// Run every dataset of every category.
    All,
}

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints failure details in full.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the aligner executable.
    #[arg(short, long, default_value = "./alineador")]
    pub executable: PathBuf,

    /// Runs every dataset of every category.
    #[arg(long)]
    pub all: bool,

    /// Runs every dataset of a category: `small`, `medium`, or `large`.
    #[arg(short, long)]
    pub category: Option<benchmark_runner::Category>,

    /// Runs a single dataset.
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Runs the scalability test.
    #[arg(long)]
    pub scalability: bool,

    /// Creates synthetic datasets with the given numbers of sequences.
    #[arg(long, num_args = 1.., value_name = "SIZE")]
    pub create_synthetic: Vec<usize>,

    /// The batch output directory.
    /// A fresh `batch_<timestamp>` directory under the results root is used if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The per-dataset timeout in seconds.
    #[arg(long, default_value_t = benchmark_runner::Executor::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// The benchmark root containing `datasets/` and `results/`.
    #[arg(long, default_value = benchmark_runner::Layout::DEFAULT_ROOT)]
    pub benchmark_root: PathBuf,
}

impl Arguments {
    ///
    /// Resolves the requested mode. The first matching flag wins, in the order
    /// synthetic, scalability, dataset, category, all.
    ///
    pub fn selection(&self) -> anyhow::Result<Selection> {
        if !self.create_synthetic.is_empty() {
            return Ok(Selection::Synthetic(self.create_synthetic.clone()));
        }
        if self.scalability {
            return Ok(Selection::Scalability);
        }
        if let Some(ref dataset) = self.dataset {
            return Ok(Selection::Dataset(dataset.clone()));
        }
        if let Some(category) = self.category {
            return Ok(Selection::Category(category));
        }
        if self.all {
            return Ok(Selection::All);
        }
        anyhow::bail!("Specify `--all`, `--category`, `--dataset`, or `--scalability`")
    }
}
