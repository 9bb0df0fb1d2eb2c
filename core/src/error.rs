use thiserror::Error;

/// Feil fra tracker-kjernen.
///
/// `InvalidInput` er den eneste feilen en innsending kan gi; `Io`/`Json`
/// kommer bare fra lasting/lagring av konfig, `Telemetry` fra oppsett av tellere.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid input for {field}: {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] prometheus::Error),
}

impl TrackerError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        TrackerError::InvalidInput { field, value: value.to_string() }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TrackerError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
