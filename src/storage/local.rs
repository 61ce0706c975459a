//! Local filesystem storage implementation.
//!
//! Writes the flat JSON export and the spreadsheet export to fixed paths.
//! Each file is written to a sibling temp file first and then renamed over
//! the destination, so an interrupted run never leaves a half-written export.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{OutputConfig, ResultSet};
use crate::storage::ReadingStorage;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    json_path: PathBuf,
    xlsx_path: PathBuf,
    sheet_name: String,
}

impl LocalStorage {
    /// Create a LocalStorage writing to the given export paths.
    pub fn new(
        json_path: impl Into<PathBuf>,
        xlsx_path: impl Into<PathBuf>,
        sheet_name: impl Into<String>,
    ) -> Self {
        Self {
            json_path: json_path.into(),
            xlsx_path: xlsx_path.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// Create a LocalStorage from the `[output]` configuration section.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.json_path, &config.xlsx_path, &config.sheet_name)
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    pub fn xlsx_path(&self) -> &Path {
        &self.xlsx_path
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(path).await?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    /// Write JSON data, pretty-printed.
    async fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(path, &bytes).await
    }
}

#[async_trait]
impl ReadingStorage for LocalStorage {
    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    async fn export_flat(&self, results: &ResultSet) -> Result<String> {
        self.write_json(&self.json_path, &results.days).await?;
        log::info!(
            "Flat data: {} days written to {}",
            results.days.len(),
            self.json_path.display()
        );
        Ok(self.json_path.display().to_string())
    }

    async fn write_table(&self, workbook: &[u8], rows: usize) -> Result<String> {
        self.write_bytes(&self.xlsx_path, workbook).await?;
        log::info!(
            "Table data: {} rows written to {}",
            rows,
            self.xlsx_path.display()
        );
        Ok(self.xlsx_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorizedDayRecord, DayRecord};
    use tempfile::TempDir;

    fn storage(tmp: &TempDir) -> LocalStorage {
        LocalStorage::new(
            tmp.path().join("out.json"),
            tmp.path().join("out.xlsx"),
            "Liturgy References",
        )
    }

    fn results(dates: &[&str]) -> ResultSet {
        let mut results = ResultSet::new();
        for date in dates {
            results.push(
                DayRecord {
                    gregorian_date: date.to_string(),
                    coptic_date: "N/A".to_string(),
                    references: vec!["John 1:1".to_string()],
                },
                CategorizedDayRecord {
                    gospel: vec!["John 1:1".to_string()],
                    ..CategorizedDayRecord::new(*date, "N/A")
                },
            );
        }
        results
    }

    fn read_flat(storage: &LocalStorage) -> Vec<DayRecord> {
        let content = std::fs::read_to_string(storage.json_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[tokio::test]
    async fn test_write_results() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp);

        let summary = storage
            .write_results(&results(&["01-01-2025", "02-01-2025"]))
            .await
            .unwrap();

        assert_eq!(summary.day_count, 2);
        let loaded = read_flat(&storage);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].gregorian_date, "02-01-2025");
        assert!(storage.xlsx_path().exists());
    }

    #[tokio::test]
    async fn test_exports_overwrite_previous_run() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp);

        storage
            .write_results(&results(&["01-01-2025", "02-01-2025", "03-01-2025"]))
            .await
            .unwrap();
        storage
            .write_results(&results(&["10-01-2025"]))
            .await
            .unwrap();

        let loaded = read_flat(&storage);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].gregorian_date, "10-01-2025");
        assert!(!tmp.path().join("out.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(
            tmp.path().join("nested/dir/out.json"),
            tmp.path().join("nested/dir/out.xlsx"),
            "Liturgy References",
        );

        storage.write_results(&ResultSet::new()).await.unwrap();

        let json = std::fs::read_to_string(storage.json_path()).unwrap();
        assert_eq!(json.trim(), "[]");
        assert!(storage.xlsx_path().exists());
    }

    #[tokio::test]
    async fn test_export_table_only_writes_workbook() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp);

        let location = storage
            .export_table(&results(&["01-01-2025"]))
            .await
            .unwrap();

        assert_eq!(location, storage.xlsx_path().display().to_string());
        assert!(storage.xlsx_path().exists());
        assert!(!storage.json_path().exists());
    }

    #[tokio::test]
    async fn test_bad_sheet_name_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(
            tmp.path().join("out.json"),
            tmp.path().join("out.xlsx"),
            "Liturgy [References]",
        );

        assert!(storage.write_results(&results(&["01-01-2025"])).await.is_err());
        assert!(!storage.json_path().exists());
        assert!(!storage.xlsx_path().exists());
    }

    #[tokio::test]
    async fn test_bad_sheet_name_keeps_previous_exports() {
        let tmp = TempDir::new().unwrap();
        storage(&tmp)
            .write_results(&results(&["01-01-2025"]))
            .await
            .unwrap();
        let before = std::fs::read(tmp.path().join("out.json")).unwrap();

        let bad = LocalStorage::new(
            tmp.path().join("out.json"),
            tmp.path().join("out.xlsx"),
            "Liturgy:References",
        );
        assert!(
            bad.write_results(&results(&["05-01-2025", "06-01-2025"]))
                .await
                .is_err()
        );

        assert_eq!(std::fs::read(tmp.path().join("out.json")).unwrap(), before);
    }
}
