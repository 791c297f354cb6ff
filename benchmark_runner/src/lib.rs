//!
//! The benchmark runner library.
//!

pub mod batch;
pub mod dataset;
pub mod executor;
pub mod layout;
pub mod report;
pub mod result;

pub use crate::batch::result::BatchResult;
pub use crate::batch::Batch;
pub use crate::dataset::category::Category;
pub use crate::dataset::Locator as DatasetLocator;
pub use crate::executor::error::Error as ExecutorError;
pub use crate::executor::Executor;
pub use crate::layout::Layout;
pub use crate::report::paths::Paths as ReportPaths;
pub use crate::report::Report;
pub use crate::result::error_kind::ErrorKind;
pub use crate::result::outcome::Outcome;
pub use crate::result::timestamp::Timestamp;
pub use crate::result::BenchmarkResult;

/// The success exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
