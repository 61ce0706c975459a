//! Storage abstractions for extraction results.
//!
//! A run produces two files, both fully overwritten on every write:
//!
//! ```text
//! ./
//! ├── out.json   # Flat: one DayRecord per processed date
//! └── out.xlsx   # Table: "Liturgy References" sheet, one row per date
//! ```

pub mod local;
pub mod xlsx;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ResultSet;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of day records written
    pub day_count: usize,
    /// Where the flat JSON export went
    pub json_location: String,
    /// Where the spreadsheet export went
    pub xlsx_location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for result storage backends.
#[async_trait]
pub trait ReadingStorage: Send + Sync {
    /// Worksheet name used for the table export.
    fn sheet_name(&self) -> &str;

    /// Write the flat records as JSON, replacing any previous export.
    async fn export_flat(&self, results: &ResultSet) -> Result<String>;

    /// Write an already rendered workbook, replacing any previous export.
    async fn write_table(&self, workbook: &[u8], rows: usize) -> Result<String>;

    /// Render the categorized records and write them as a spreadsheet.
    async fn export_table(&self, results: &ResultSet) -> Result<String> {
        let workbook = xlsx::render_workbook(&results.categorized, self.sheet_name())?;
        self.write_table(&workbook, results.categorized.len()).await
    }

    /// Write both exports.
    ///
    /// The workbook is rendered before anything touches disk, so a rendering
    /// error leaves both previous exports as they were.
    async fn write_results(&self, results: &ResultSet) -> Result<WriteSummary> {
        let workbook = xlsx::render_workbook(&results.categorized, self.sheet_name())?;

        let json_location = self.export_flat(results).await?;
        let xlsx_location = self
            .write_table(&workbook, results.categorized.len())
            .await?;

        Ok(WriteSummary {
            day_count: results.len(),
            json_location,
            xlsx_location,
            timestamp: Utc::now(),
        })
    }
}
