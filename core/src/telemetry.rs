use prometheus::{Counter, Encoder, IntCounter, Registry, TextEncoder};

use crate::error::Result;

/// Tellere for én tracker-instans (eget registry, ingen globale).
#[derive(Clone)]
pub struct Telemetry {
    registry: Registry,
    submissions: IntCounter,
    rejected: IntCounter,
    distance_km: Counter,
}

impl Telemetry {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let submissions =
            IntCounter::new("runtracker_submissions_total", "Accepted workout submissions")?;
        let rejected =
            IntCounter::new("runtracker_rejected_total", "Rejected workout submissions")?;
        let distance_km = Counter::new("runtracker_distance_km_total", "Logged distance in km")?;

        registry.register(Box::new(submissions.clone()))?;
        registry.register(Box::new(rejected.clone()))?;
        registry.register(Box::new(distance_km.clone()))?;

        Ok(Self { registry, submissions, rejected, distance_km })
    }

    pub(crate) fn record_submission(&self, distance_km: f64) {
        self.submissions.inc();
        self.distance_km.inc_by(distance_km);
    }

    pub(crate) fn record_rejection(&self) {
        self.rejected.inc();
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions.get()
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected.get()
    }

    pub fn distance_km_total(&self) -> f64 {
        self.distance_km.get()
    }

    /// Prometheus tekstformat.
    pub fn gather_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| prometheus::Error::Msg(format!("non-utf8 exposition: {e}")).into())
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry")
            .field("submissions", &self.submissions.get())
            .field("rejected", &self.rejected.get())
            .field("distance_km", &self.distance_km.get())
            .finish()
    }
}
