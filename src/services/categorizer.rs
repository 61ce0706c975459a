// src/services/categorizer.rs

//! Citation categorizer.
//!
//! Classifies a citation by the book name it starts with. Tables are tested
//! in a fixed priority order: Catholic Epistles, Pauline Epistles, Acts,
//! Psalms, Gospels. Anything unmatched is filed under [`Category::Gospel`].

use crate::models::Category;

/// Catholic (general) epistles.
pub const CATHOLIC_EPISTLES: [&str; 7] = [
    "James", "1 Peter", "2 Peter", "1 John", "2 John", "3 John", "Jude",
];

/// Pauline epistles, Hebrews included.
pub const PAULINE_EPISTLES: [&str; 14] = [
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
];

pub const ACTS: &str = "Acts";

pub const PSALMS: &str = "Psalms";

pub const GOSPELS: [&str; 4] = ["Matthew", "Mark", "Luke", "John"];

/// Category for a single citation.
pub fn categorize(citation: &str) -> Category {
    if starts_with_any(citation, &CATHOLIC_EPISTLES) {
        Category::CatholicEpistle
    } else if starts_with_any(citation, &PAULINE_EPISTLES) {
        Category::PaulineEpistle
    } else if citation.starts_with(ACTS) {
        Category::Acts
    } else if citation.starts_with(PSALMS) {
        Category::Psalm
    } else if starts_with_any(citation, &GOSPELS) {
        Category::Gospel
    } else {
        log::debug!("No book table matched '{}', filing as gospel", citation);
        Category::default()
    }
}

fn starts_with_any(citation: &str, books: &[&str]) -> bool {
    books.iter().any(|book| citation.starts_with(book))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category() {
        assert_eq!(categorize("James 1:1"), Category::CatholicEpistle);
        assert_eq!(categorize("Romans 8:28"), Category::PaulineEpistle);
        assert_eq!(categorize("Acts 2:1"), Category::Acts);
        assert_eq!(categorize("Psalms 23:1"), Category::Psalm);
        assert_eq!(categorize("John 3:16"), Category::Gospel);
    }

    #[test]
    fn test_unknown_falls_back_to_gospel() {
        assert_eq!(categorize("Unknown 1:1"), Category::Gospel);
        assert_eq!(categorize(""), Category::Gospel);
        assert_eq!(categorize("Psalm 23:1"), Category::Gospel);
    }

    #[test]
    fn test_numbered_epistles_before_gospels() {
        // "1 John" must not be mistaken for the Gospel of John.
        assert_eq!(categorize("1 John 4:7-21"), Category::CatholicEpistle);
        assert_eq!(categorize("3 John 1:1-15"), Category::CatholicEpistle);
        assert_eq!(categorize("2 Timothy 3:10"), Category::PaulineEpistle);
        assert_eq!(categorize("Hebrews 11:1"), Category::PaulineEpistle);
    }

    #[test]
    fn test_every_table_entry_matches_its_own_category() {
        for book in CATHOLIC_EPISTLES {
            assert_eq!(categorize(&format!("{book} 1:1")), Category::CatholicEpistle);
        }
        for book in PAULINE_EPISTLES {
            assert_eq!(categorize(&format!("{book} 1:1")), Category::PaulineEpistle);
        }
        for book in GOSPELS {
            assert_eq!(categorize(&format!("{book} 1:1")), Category::Gospel);
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(categorize("james 1:1"), Category::Gospel);
        assert_eq!(categorize("acts 2:1"), Category::Gospel);
    }
}
