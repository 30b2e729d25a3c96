//! Settings for turning extracted products into sheet rows.

use crate::error::CurvaError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many top products are selected when the user picks none.
pub const DEFAULT_SELECTION: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Sector label to use instead of the guessed one.
    pub sector: Option<String>,

    /// Reporting month as MM/YYYY. Defaults to the current month.
    pub month: String,

    /// Free-text week label, e.g. "1ª semana de ago/2025".
    pub week: String,

    /// Number of top products selected by default.
    pub default_selection: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sector: None,
            month: current_month(),
            week: String::new(),
            default_selection: DEFAULT_SELECTION,
        }
    }
}

/// The current local month as MM/YYYY.
pub fn current_month() -> String {
    chrono::Local::now().format("%m/%Y").to_string()
}

/// Load a sheet config from a JSON file.
pub fn load_config(path: &Path) -> Result<SheetConfig, CurvaError> {
    let content = std::fs::read_to_string(path).map_err(|e| CurvaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: SheetConfig =
        serde_json::from_str(&content).map_err(|e| CurvaError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a sheet config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<SheetConfig, CurvaError> {
    let config: SheetConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &SheetConfig) -> Result<(), CurvaError> {
    validate_month(&config.month)?;

    if config.default_selection == 0 {
        return Err(CurvaError::ConfigInvalid(
            "default_selection must be at least 1".into(),
        ));
    }

    if let Some(ref sector) = config.sector {
        if sector.trim().is_empty() {
            return Err(CurvaError::ConfigInvalid(
                "sector must not be empty when given".into(),
            ));
        }
    }

    Ok(())
}

/// Check that a month label reads MM/YYYY with a real month number.
pub fn validate_month(month: &str) -> Result<(), CurvaError> {
    let invalid =
        || CurvaError::ConfigInvalid(format!("invalid month '{}' (expected MM/YYYY)", month));
    let digits = |s: &str, n: usize| s.len() == n && s.chars().all(|c| c.is_ascii_digit());

    let (mm, yyyy) = month.split_once('/').ok_or_else(invalid)?;
    if !digits(mm, 2) || !digits(yyyy, 4) {
        return Err(invalid());
    }
    match mm.parse::<u32>() {
        Ok(1..=12) => Ok(()),
        _ => Err(invalid()),
    }
}
