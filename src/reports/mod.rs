//! The reporting engine
//!
//! Four query shapes over the immutable dataset: the raw listing, the
//! filtered listing with totals, the per-account yearly trend, and the
//! per-year margin analysis. Every query is a pure function of the
//! dataset and its explicit parameters.

pub mod filtered;
pub mod margin;
pub mod raw;
pub mod trend;

pub use filtered::FilteredReport;
pub use margin::MarginReport;
pub use raw::RawListing;
pub use trend::{TrendPoint, TrendReport};
