//! Reading service payload.
//!
//! Every field is optional on the wire. Missing collections deserialize to
//! empty vectors so extraction never has to special-case absent levels.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel used when a day carries no feast date.
pub const NO_COPTIC_DATE: &str = "N/A";

/// A day's reading document as returned by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDocument {
    #[serde(default)]
    pub coptic_date: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_sections: Vec<SubSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub readings: Vec<Reading>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reading {
    #[serde(default, deserialize_with = "null_as_default")]
    pub passages: Vec<Passage>,
}

/// A single scripture passage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    /// Book name in the requested language
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_translation: String,

    /// Chapter and verse locator, e.g. `3:16-21`
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub reference: String,
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Passage {
    /// Citation string: book name and locator joined by one space.
    pub fn citation(&self) -> String {
        format!("{} {}", self.book_translation, self.reference)
    }
}

impl ReadingDocument {
    /// Feast date as sent by the service, or [`NO_COPTIC_DATE`].
    pub fn raw_coptic_date(&self) -> &str {
        match self.coptic_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => NO_COPTIC_DATE,
        }
    }

    /// Citations of every passage under sections titled exactly `section_title`,
    /// in document order.
    pub fn citations(&self, section_title: &str) -> Vec<String> {
        self.sections
            .iter()
            .filter(|section| section.title == section_title)
            .flat_map(|section| &section.sub_sections)
            .flat_map(|sub| &sub.readings)
            .flat_map(|reading| &reading.passages)
            .map(Passage::citation)
            .collect()
    }
}
