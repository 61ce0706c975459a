//! Gregorian calendar dates and inclusive date ranges.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A day/month/year triple as entered by the user (`DD-MM-YYYY`).
///
/// Only the numeric ranges are checked at parse time. Combinations that do
/// not exist on the calendar (such as `31-02-2025`) are accepted and roll
/// over to a later day once converted with [`CalendarDate::to_naive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    /// Parse a `DD-MM-YYYY` string. Leading zeros are optional.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().split('-').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(AppError::invalid_date(input));
        };

        let day: u32 = day.parse().map_err(|_| AppError::invalid_date(input))?;
        let month: u32 = month.parse().map_err(|_| AppError::invalid_date(input))?;
        let year: i32 = year.parse().map_err(|_| AppError::invalid_date(input))?;

        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(AppError::invalid_date(input));
        }

        Ok(Self { day, month, year })
    }

    /// Convert to a real calendar date, rolling surplus days into the next month.
    pub fn to_naive(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.day - 1))))
            .ok_or_else(|| AppError::invalid_date(self.to_string()))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for CalendarDate {
    /// Zero-padded `DD-MM-YYYY`, the form used in request URLs and records.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.day, self.month, self.year)
    }
}

/// An inclusive, ascending run of calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from two user-entered endpoints.
    ///
    /// Both endpoints are normalized first; the range is rejected when the
    /// normalized start falls after the normalized end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self> {
        let start_date = start.to_naive()?;
        let end_date = end.to_naive()?;

        if start_date > end_date {
            return Err(AppError::DateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self {
            start: start_date,
            end: end_date,
        })
    }

    /// Parse both endpoints from `DD-MM-YYYY` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(CalendarDate::parse(start)?, CalendarDate::parse(end)?)
    }

    /// Number of days in the range, endpoints included.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Always false; a range holds at least its start day.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> CalendarDate {
        self.start.into()
    }

    pub fn end(&self) -> CalendarDate {
        self.end.into()
    }

    /// Iterate every day from start to end inclusive.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.start
            .iter_days()
            .take_while(move |date| *date <= self.end)
            .map(CalendarDate::from)
    }

    /// Materialize the full sequence of days.
    pub fn enumerate(&self) -> Vec<CalendarDate> {
        self.iter().collect()
    }
}
