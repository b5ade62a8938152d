//! Document models, loader and data-quality checks for Hawaii SNAP summaries.
//!
//! The four JSON documents consumed by the dashboard are produced upstream
//! (see the `prepare` command in `hsnap-cmd`). This crate owns:
//! - `monthly`, `county`, `trends`, `metadata`: typed document models
//! - `loader`: the all-or-nothing concurrent load behind a `Fetcher` seam
//! - `series`: cutoff filtering of parallel label/value sequences
//! - `validate`: data-quality findings for a loaded `Dataset`

pub mod county;
pub mod dates;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod monthly;
pub mod series;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod trends;
pub mod validate;

pub use county::CountySnapshot;
pub use loader::{load, DataSources, Dataset, Fetcher};
pub use metadata::Metadata;
pub use monthly::MonthlySeries;
pub use trends::TrendsSummary;
