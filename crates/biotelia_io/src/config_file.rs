//! Loading and saving `config.toml`.

use crate::error::{IoError, Result};
use biotelia_core::config::AppConfig;
use std::fs;
use std::path::Path;

/// Loads and validates configuration from `path`.
///
/// A missing file is not an error: defaults are written to `path` and
/// returned, so the next run has an editable file to start from.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        let default = AppConfig::default();
        if let Err(e) = save_config(path, &default) {
            tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
        } else {
            tracing::info!(path = %path.display(), "Wrote default config");
        }
        return Ok(default);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| IoError::from(e).with_context(format!("parsing {}", path.display())))?;
    config.validate().map_err(|e| {
        IoError::validation(e.to_string()).with_context(format!("validating {}", path.display()))
    })?;
    Ok(config)
}

pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> Result<()> {
    let text = toml::to_string(config)?;
    fs::write(path, text)?;
    Ok(())
}
