//! Pipeline entry points for extractor operations.
//!
//! - `run_extraction`: Fetch, categorize and export a date range
//! - `run_validate`: Check configuration before a run

pub mod extract;
pub mod validate;

pub use extract::{collect_readings, process_day, run_extraction};
pub use validate::run_validate;
