// src/storage/xlsx.rs

//! Spreadsheet rendering for categorized records.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::{CategorizedDayRecord, Category};

/// Column headers, in output order.
pub const HEADERS: [&str; 7] = [
    "Date",
    "Coptic Date",
    "Catholic Epistle",
    "Pauline Epistle",
    "Acts",
    "Psalm",
    "Gospel",
];

const DATE_WIDTH: f64 = 12.0;
const COPTIC_DATE_WIDTH: f64 = 18.0;
const CITATION_WIDTH: f64 = 30.0;

/// One spreadsheet row per record; citation cells are joined with `"; "`.
pub fn table_row(record: &CategorizedDayRecord) -> [String; 7] {
    let [catholic, pauline, acts, psalm, gospel] = Category::ALL.map(|c| record.joined(c));
    [
        record.gregorian_date.clone(),
        record.coptic_date.clone(),
        catholic,
        pauline,
        acts,
        psalm,
        gospel,
    ]
}

/// Render the records into an XLSX workbook with a single named sheet.
pub fn render_workbook(records: &[CategorizedDayRecord], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    worksheet.set_column_width(0, DATE_WIDTH)?;
    worksheet.set_column_width(1, COPTIC_DATE_WIDTH)?;
    for col in 2..HEADERS.len() {
        worksheet.set_column_width(col as u16, CITATION_WIDTH)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, value) in table_row(record).iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
