use std::fmt::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Oppførsel for trackeren. Lagrer aldri historikk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Bruk sist kjente mål på dager uten eget mål.
    pub carry_forward_target: bool,
    /// chrono-format for klokkeslett i historikken.
    pub time_format: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            carry_forward_target: true,
            time_format: "%H:%M".to_string(),
        }
    }
}

impl TrackerConfig {
    /// `time_format` må kunne formatere et rent klokkeslett (ingen datofelt).
    pub fn validate(&self) -> Result<()> {
        check_time_format(&self.time_format)
    }
}

fn check_time_format(fmt: &str) -> Result<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(TrackerError::invalid("time_format", fmt));
    }
    // Datofelt som %Y kan ikke fylles fra NaiveTime og feiler først ved skriving.
    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveTime::MIN.format(fmt)).is_err() {
        return Err(TrackerError::invalid("time_format", fmt));
    }
    Ok(())
}

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default.
pub fn load_config(path: impl AsRef<Path>) -> Result<TrackerConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: TrackerConfig = serde_json::from_str(&contents)?;
        cfg.validate()?;
        info!(
            "config loaded from {} (carry_forward_target={})",
            path.display(),
            cfg.carry_forward_target
        );
        Ok(cfg)
    } else {
        warn!("no config at {}, using defaults", path.display());
        Ok(TrackerConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &TrackerConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    info!("config saved to {}", path.display());
    Ok(())
}
