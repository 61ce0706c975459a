//! Per-day output records.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Flat record: every Liturgy citation of one day in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// `DD-MM-YYYY`
    pub gregorian_date: String,

    /// Formatted feast date or `N/A`
    pub coptic_date: String,

    pub references: Vec<String>,
}

/// The same citations as [`DayRecord`], partitioned by [`Category`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedDayRecord {
    pub gregorian_date: String,
    pub coptic_date: String,
    pub catholic_epistle: Vec<String>,
    pub pauline_epistle: Vec<String>,
    pub acts: Vec<String>,
    pub psalm: Vec<String>,
    pub gospel: Vec<String>,
}

impl CategorizedDayRecord {
    /// Empty buckets for a day.
    pub fn new(gregorian_date: impl Into<String>, coptic_date: impl Into<String>) -> Self {
        Self {
            gregorian_date: gregorian_date.into(),
            coptic_date: coptic_date.into(),
            ..Self::default()
        }
    }

    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::CatholicEpistle => &self.catholic_epistle,
            Category::PaulineEpistle => &self.pauline_epistle,
            Category::Acts => &self.acts,
            Category::Psalm => &self.psalm,
            Category::Gospel => &self.gospel,
        }
    }

    pub fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::CatholicEpistle => &mut self.catholic_epistle,
            Category::PaulineEpistle => &mut self.pauline_epistle,
            Category::Acts => &mut self.acts,
            Category::Psalm => &mut self.psalm,
            Category::Gospel => &mut self.gospel,
        }
    }

    /// Spreadsheet cell text for a bucket.
    pub fn joined(&self, category: Category) -> String {
        self.bucket(category).join("; ")
    }

    /// Total citations across all buckets.
    pub fn citation_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }
}

/// Accumulated output of a run.
///
/// `days` and `categorized` are appended together, so index `i` of both
/// describes the same date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub days: Vec<DayRecord>,
    pub categorized: Vec<CategorizedDayRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one processed day to both sequences.
    pub fn push(&mut self, day: DayRecord, categorized: CategorizedDayRecord) {
        self.days.push(day);
        self.categorized.push(categorized);
    }

    /// Number of days with records.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total citations across all days.
    pub fn citation_count(&self) -> usize {
        self.days.iter().map(|d| d.references.len()).sum()
    }
}
