// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    log::info!("✓ Config OK");
    log::info!("    Base URL: {}", config.api.base_url);
    log::info!("    Language ID: {}", config.api.language_id);
    log::info!("    Section: {}", config.api.section_title);
    log::info!("    Request delay: {}ms", config.api.request_delay_ms);
    log::info!("    JSON output: {}", config.output.json_path);
    log::info!(
        "    Excel output: {} (sheet \"{}\")",
        config.output.xlsx_path,
        config.output.sheet_name
    );
    log::info!(
        "    Default range: {} to {}",
        config.dates.default_start,
        config.dates.default_end
    );

    Ok(())
}
