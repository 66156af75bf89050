// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    match config.validate() {
        Ok(()) => {
            log::info!("✓ Config OK");
            log::info!("    Index URL: {}", config.source.index_url);
            log::info!("    Base URL: {}", config.source.base_url);
            log::info!("    User agent: {}", config.http.user_agent);
            log::info!("    Timeout: {}s", config.http.timeout_secs);
            log::info!("    Output: {}", config.paths.output_file.display());
            log::info!("    Stations: {}", config.stations.len());
            Ok(())
        }
        Err(e) => {
            log::error!("Config validation failed: {e}");
            Err(e)
        }
    }
}
