// src/utils/coptic.rs

//! Coptic calendar date formatting.

use crate::models::NO_COPTIC_DATE;

/// Coptic month names, Thout first. Nasie is the short thirteenth month.
pub const COPTIC_MONTHS: [&str; 13] = [
    "Thout",
    "Paopi",
    "Hathor",
    "Kiahk",
    "Toba",
    "Meshir",
    "Paremhat",
    "Paremoude",
    "Pashons",
    "Paona",
    "Epep",
    "Mesra",
    "Nasie",
];

/// Render a `DD/MM/YYYY` Coptic date as `"<Month> <DD>, <YYYY>"`.
///
/// Empty input and the `N/A` sentinel yield `N/A`. Anything that does not
/// parse as three integers with a month in 1..=13 is returned unchanged.
///
/// # Examples
/// ```
/// use katameros::utils::coptic::format_coptic_date;
///
/// assert_eq!(format_coptic_date("15/05/2025"), "Toba 15, 2025");
/// assert_eq!(format_coptic_date("bad"), "bad");
/// ```
pub fn format_coptic_date(raw: &str) -> String {
    if raw.is_empty() || raw == NO_COPTIC_DATE {
        return NO_COPTIC_DATE.to_string();
    }

    match parse_parts(raw) {
        Some((day, month, year)) => {
            format!("{} {:02}, {}", COPTIC_MONTHS[month - 1], day, year)
        }
        None => raw.to_string(),
    }
}

fn parse_parts(raw: &str) -> Option<(u32, usize, i64)> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: u32 = day.trim().parse().ok()?;
    let month: usize = month.trim().parse().ok()?;
    let year: i64 = year.trim().parse().ok()?;

    (1..=COPTIC_MONTHS.len())
        .contains(&month)
        .then_some((day, month, year))
}
