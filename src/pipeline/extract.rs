// src/pipeline/extract.rs

//! Liturgy reference extraction pipeline.
//!
//! Dates are processed strictly one after another: fetch, extract,
//! categorize, pace, then the next date. Failed dates contribute nothing.

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{
    CalendarDate, CategorizedDayRecord, Config, DateRange, DayRecord, ResultSet, RunStats,
};
use crate::services::{FetchOutcome, ReadingFetcher, aggregate_day};
use crate::storage::ReadingStorage;

/// Process a single date into its pair of records.
///
/// Returns `None` when the date has to be skipped (non-2xx, network or
/// parse failure). The pacing delay has elapsed either way.
pub async fn process_day(
    fetcher: &ReadingFetcher,
    date: CalendarDate,
) -> Option<(DayRecord, CategorizedDayRecord)> {
    log::info!("Processing: {}", date);

    match fetcher.fetch_paced(date).await {
        FetchOutcome::Success(readings) => {
            log::info!("  Found {} liturgy references", readings.citations.len());
            Some(aggregate_day(
                readings.date,
                &readings.raw_coptic_date,
                readings.citations,
            ))
        }
        FetchOutcome::HttpStatus(status) => {
            log::warn!("Failed to fetch {}: {}", date, status);
            None
        }
        FetchOutcome::Failed(error) => {
            log::error!("Error processing {}: {}", date, error);
            None
        }
    }
}

/// Fold every date of the range into a [`ResultSet`], in calendar order.
pub async fn collect_readings(fetcher: &ReadingFetcher, range: &DateRange) -> ResultSet {
    stream::iter(range.iter())
        .then(|date| process_day(fetcher, date))
        .fold(ResultSet::new(), |mut results, day| async move {
            if let Some((record, categorized)) = day {
                results.push(record, categorized);
            }
            results
        })
        .await
}

/// Run the extractor over a date range and export the results.
///
/// The configuration is validated before the first request.
pub async fn run_extraction(
    config: &Config,
    storage: &dyn ReadingStorage,
    range: &DateRange,
) -> Result<RunStats> {
    config.validate()?;

    let start_time = Utc::now();
    log::info!(
        "Extracting liturgy references from {} to {}...",
        range.start(),
        range.end()
    );

    let fetcher = ReadingFetcher::new(&config.api)?;
    let results = collect_readings(&fetcher, range).await;

    let summary = storage.write_results(&results).await?;

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        days_requested: range.len(),
        days_processed: results.len(),
        days_skipped: range.len() - results.len(),
        citation_count: results.citation_count(),
    };

    log::info!("Saved liturgy references to:");
    log::info!("  JSON: {}", summary.json_location);
    log::info!("  Excel: {}", summary.xlsx_location);
    log::info!("Total days processed: {}", stats.days_processed);
    log::info!("Total liturgy references found: {}", stats.citation_count);
    if stats.days_skipped > 0 {
        log::debug!("Days skipped: {}", stats.days_skipped);
    }
    log::debug!("Elapsed: {}ms", stats.elapsed().num_milliseconds());

    Ok(stats)
}
