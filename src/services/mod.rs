//! Service layer for the extractor.
//!
//! This module contains the business logic for:
//! - Reading retrieval (`ReadingFetcher`)
//! - Citation classification (`categorize`)
//! - Per-day record building (`aggregate_day`)

pub mod aggregate;
pub mod categorizer;
mod readings;

pub use aggregate::aggregate_day;
pub use categorizer::categorize;
pub use readings::{DayReadings, FetchOutcome, ReadingFetcher};
