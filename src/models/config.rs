//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::CalendarDate;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Reading service and request pacing settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Export destinations
    #[serde(default)]
    pub output: OutputConfig,

    /// Defaults offered at the date prompts
    #[serde(default)]
    pub dates: DatesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.api.section_title.is_empty() {
            return Err(AppError::validation("api.section_title is empty"));
        }
        url::Url::parse(&self.api.base_url).map_err(|e| {
            AppError::validation(format!("api.base_url '{}': {e}", self.api.base_url))
        })?;
        if self.output.json_path.trim().is_empty() {
            return Err(AppError::validation("output.json_path is empty"));
        }
        if self.output.xlsx_path.trim().is_empty() {
            return Err(AppError::validation("output.xlsx_path is empty"));
        }
        validate_sheet_name(&self.output.sheet_name)?;
        CalendarDate::parse(&self.dates.default_start)?;
        CalendarDate::parse(&self.dates.default_end)?;
        Ok(())
    }
}

/// Characters Excel refuses in a worksheet name.
const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Check a worksheet name against Excel's rules.
fn validate_sheet_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 || len > 31 {
        return Err(AppError::validation(
            "output.sheet_name must be 1-31 characters",
        ));
    }
    if let Some(c) = name.chars().find(|c| SHEET_NAME_FORBIDDEN.contains(c)) {
        return Err(AppError::validation(format!(
            "output.sheet_name '{name}' contains forbidden character '{c}'"
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(AppError::validation(format!(
            "output.sheet_name '{name}' cannot start or end with an apostrophe"
        )));
    }
    Ok(())
}

/// Reading service client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint the `DD-MM-YYYY` path segment is appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Language selector sent as `languageId`
    #[serde(default = "defaults::language_id")]
    pub language_id: u32,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay after each date in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Title of the only section citations are taken from
    #[serde(default = "defaults::section_title")]
    pub section_title: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            language_id: defaults::language_id(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            section_title: defaults::section_title(),
        }
    }
}

/// Export file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "defaults::json_path")]
    pub json_path: String,

    #[serde(default = "defaults::xlsx_path")]
    pub xlsx_path: String,

    /// Worksheet name inside the XLSX workbook
    #[serde(default = "defaults::sheet_name")]
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: defaults::json_path(),
            xlsx_path: defaults::xlsx_path(),
            sheet_name: defaults::sheet_name(),
        }
    }
}

/// Date prompt defaults, both `DD-MM-YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
    #[serde(default = "defaults::default_start")]
    pub default_start: String,

    #[serde(default = "defaults::default_end")]
    pub default_end: String,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            default_start: defaults::default_start(),
            default_end: defaults::default_end(),
        }
    }
}

mod defaults {
    // Api defaults
    pub fn base_url() -> String {
        "https://api.katameros.app/readings/gregorian".into()
    }
    pub fn language_id() -> u32 {
        2
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; katameros/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        100
    }
    pub fn section_title() -> String {
        "Liturgy".into()
    }

    // Output defaults
    pub fn json_path() -> String {
        "out.json".into()
    }
    pub fn xlsx_path() -> String {
        "out.xlsx".into()
    }
    pub fn sheet_name() -> String {
        "Liturgy References".into()
    }

    // Date defaults
    pub fn default_start() -> String {
        "20-06-2025".into()
    }
    pub fn default_end() -> String {
        "30-06-2025".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_long_sheet_name() {
        let mut config = Config::default();
        config.output.sheet_name = "x".repeat(32);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_forbidden_sheet_characters() {
        for name in ["Liturgy [References]", "a:b", "a*b", "a?b", "a/b", "a\\b"] {
            let mut config = Config::default();
            config.output.sheet_name = name.to_string();
            assert!(config.validate().is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn validate_rejects_apostrophe_edges() {
        let mut config = Config::default();
        config.output.sheet_name = "'Liturgy".to_string();
        assert!(config.validate().is_err());

        config.output.sheet_name = "Liturgy'".to_string();
        assert!(config.validate().is_err());

        config.output.sheet_name = "Saint's Liturgy".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_default_date() {
        let mut config = Config::default();
        config.dates.default_end = "2025-06-30".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            request_delay_ms = 0

            [output]
            json_path = "readings.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.request_delay_ms, 0);
        assert_eq!(config.api.language_id, 2);
        assert_eq!(config.api.section_title, "Liturgy");
        assert_eq!(config.output.json_path, "readings.json");
        assert_eq!(config.output.xlsx_path, "out.xlsx");
        assert_eq!(config.dates.default_start, "20-06-2025");
    }

    #[test]
    fn bundled_config_file_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/katameros.toml");
        let config = Config::load(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.request_delay_ms, 100);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/katameros.toml");
        assert_eq!(config.output.sheet_name, "Liturgy References");
    }
}
