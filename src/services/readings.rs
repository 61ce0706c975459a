// src/services/readings.rs

//! Reading fetcher service.
//!
//! Requests one day's readings from the Katameros API and extracts the
//! Liturgy citations. Each date gets a single attempt; failures are reported
//! as a [`FetchOutcome`] rather than aborting the run.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, CalendarDate, ReadingDocument};
use crate::utils::http;

/// Citations extracted for one successfully fetched day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReadings {
    pub date: CalendarDate,
    /// Feast date exactly as sent, or `N/A`
    pub raw_coptic_date: String,
    pub citations: Vec<String>,
}

/// Result of a single fetch attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response with a readable body
    Success(DayReadings),
    /// The service answered with a non-success status
    HttpStatus(StatusCode),
    /// Network or JSON failure
    Failed(AppError),
}

/// Service for fetching daily readings.
pub struct ReadingFetcher {
    client: Client,
    base_url: Url,
    language_id: u32,
    section_title: String,
    delay: Duration,
}

impl ReadingFetcher {
    /// Create a fetcher with a client built from the API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Self::with_client(client, config)
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "api.base_url '{}' cannot take a path",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            language_id: config.language_id,
            section_title: config.section_title.clone(),
            delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// Request URL for a date: `<base>/<DD-MM-YYYY>?languageId=<id>`.
    pub fn day_url(&self, date: CalendarDate) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&date.to_string());
        }
        url.query_pairs_mut()
            .append_pair("languageId", &self.language_id.to_string());
        url
    }

    /// Fetch and decode the reading document for a date.
    ///
    /// Non-2xx responses become [`AppError::Status`].
    pub async fn fetch_document(&self, date: CalendarDate) -> Result<ReadingDocument> {
        let url = self.day_url(date);
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                date: date.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one date and extract its citations. Never fails; see [`FetchOutcome`].
    pub async fn fetch(&self, date: CalendarDate) -> FetchOutcome {
        match self.fetch_document(date).await {
            Ok(document) => FetchOutcome::Success(DayReadings {
                date,
                raw_coptic_date: document.raw_coptic_date().to_string(),
                citations: document.citations(&self.section_title),
            }),
            Err(AppError::Status { status, .. }) => FetchOutcome::HttpStatus(status),
            Err(error) => FetchOutcome::Failed(error),
        }
    }

    /// Fetch one date, then wait out the pacing delay whatever the outcome.
    pub async fn fetch_paced(&self, date: CalendarDate) -> FetchOutcome {
        let outcome = self.fetch(date).await;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        outcome
    }
}
