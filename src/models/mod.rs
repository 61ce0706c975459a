// src/models/mod.rs

//! Domain models for the extractor.
//!
//! This module contains the data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod config;
mod date;
mod reading;
mod record;

// Re-export all public types
pub use category::Category;
pub use config::{ApiConfig, Config, DatesConfig, OutputConfig};
pub use date::{CalendarDate, DateRange};
pub use reading::{NO_COPTIC_DATE, Passage, Reading, ReadingDocument, Section, SubSection};
pub use record::{CategorizedDayRecord, DayRecord, ResultSet};

/// Timing and tallies for a single extraction run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RunStats {
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    /// Calendar days in the requested range
    pub days_requested: usize,
    /// Days that produced records
    pub days_processed: usize,
    /// Days skipped after a fetch or parse failure
    pub days_skipped: usize,
    pub citation_count: usize,
}

impl RunStats {
    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}
