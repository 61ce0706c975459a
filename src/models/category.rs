//! Citation categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The bucket a citation is filed under in the categorized export.
///
/// Citations from books outside the known tables fall back to `Gospel`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CatholicEpistle,
    PaulineEpistle,
    Acts,
    Psalm,
    #[default]
    Gospel,
}

impl Category {
    /// All categories in export column order.
    pub const ALL: [Category; 5] = [
        Category::CatholicEpistle,
        Category::PaulineEpistle,
        Category::Acts,
        Category::Psalm,
        Category::Gospel,
    ];

    /// Spreadsheet column header.
    pub fn column_name(&self) -> &'static str {
        match self {
            Category::CatholicEpistle => "Catholic Epistle",
            Category::PaulineEpistle => "Pauline Epistle",
            Category::Acts => "Acts",
            Category::Psalm => "Psalm",
            Category::Gospel => "Gospel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
