// src/services/aggregate.rs

//! Per-day aggregation of citations into flat and categorized records.

use crate::models::{CalendarDate, CategorizedDayRecord, DayRecord};
use crate::services::categorizer::categorize;
use crate::utils::coptic::format_coptic_date;

/// Build both records for one day.
///
/// The feast date is formatted once and shared. Every citation lands in
/// exactly one bucket, and buckets keep extraction order.
pub fn aggregate_day(
    date: CalendarDate,
    raw_coptic_date: &str,
    citations: Vec<String>,
) -> (DayRecord, CategorizedDayRecord) {
    let gregorian_date = date.to_string();
    let coptic_date = format_coptic_date(raw_coptic_date);

    let mut categorized = CategorizedDayRecord::new(gregorian_date.clone(), coptic_date.clone());
    for citation in &citations {
        categorized
            .bucket_mut(categorize(citation))
            .push(citation.clone());
    }

    let day = DayRecord {
        gregorian_date,
        coptic_date,
        references: citations,
    };

    (day, categorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date() -> CalendarDate {
        CalendarDate::parse("01-01-2025").unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_buckets_cover_flat_references_exactly_once() {
        let citations = strings(&["James 1:1", "Romans 8:28"]);
        let (day, categorized) = aggregate_day(date(), "N/A", citations.clone());

        assert_eq!(day.references, citations);

        let mut flattened: Vec<String> = Category::ALL
            .iter()
            .flat_map(|c| categorized.bucket(*c).to_vec())
            .collect();
        let mut expected = citations;
        flattened.sort();
        expected.sort();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_bucket_order_follows_extraction_order() {
        let (_, categorized) = aggregate_day(
            date(),
            "",
            strings(&["Luke 1:1", "Acts 3:1", "John 2:1", "Acts 1:1", "Psalms 1:1"]),
        );

        assert_eq!(categorized.gospel, strings(&["Luke 1:1", "John 2:1"]));
        assert_eq!(categorized.acts, strings(&["Acts 3:1", "Acts 1:1"]));
        assert_eq!(categorized.psalm, strings(&["Psalms 1:1"]));
        assert!(categorized.catholic_epistle.is_empty());
        assert!(categorized.pauline_epistle.is_empty());
    }

    #[test]
    fn test_dates_shared_by_both_records() {
        let (day, categorized) = aggregate_day(date(), "15/05/2025", Vec::new());

        assert_eq!(day.gregorian_date, "01-01-2025");
        assert_eq!(day.coptic_date, "Toba 15, 2025");
        assert_eq!(categorized.gregorian_date, day.gregorian_date);
        assert_eq!(categorized.coptic_date, day.coptic_date);
        assert!(day.references.is_empty());
        assert_eq!(categorized.citation_count(), 0);
    }
}
