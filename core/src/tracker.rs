use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::metrics::{require_positive, WorkoutMetrics};
use crate::models::{DailyProgress, DailyRecord, SubmitRequest, WorkoutEntry};
use crate::telemetry::Telemetry;

/// Holder historikk og dagsmål for én bruker i minnet.
///
/// Eies av presentasjonslaget; ingen global tilstand. All mutasjon går via
/// `submit*`, og en avvist innsending endrer ingenting.
#[derive(Debug)]
pub struct WorkoutTracker<C: Clock = SystemClock> {
    clock: C,
    config: TrackerConfig,
    history: BTreeMap<NaiveDate, Vec<WorkoutEntry>>,
    daily: BTreeMap<NaiveDate, DailyRecord>,
    // Oppdateres kun ved eksplisitt mål.
    last_known_target: Option<f64>,
    latest: Option<(NaiveDate, usize)>,
    telemetry: Telemetry,
}

impl WorkoutTracker<SystemClock> {
    pub fn new() -> Result<Self> {
        Self::with_clock(SystemClock, TrackerConfig::default())
    }
}

impl<C: Clock> WorkoutTracker<C> {
    pub fn with_clock(clock: C, config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            config,
            history: BTreeMap::new(),
            daily: BTreeMap::new(),
            last_known_target: None,
            latest: None,
            telemetry: Telemetry::new()?,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Logger en økt for i dag (dato og klokkeslett fra klokken).
    pub fn submit(
        &mut self,
        distance_km: f64,
        duration_min: f64,
        weight_kg: f64,
        target_km: Option<f64>,
    ) -> Result<WorkoutEntry> {
        let now = self.clock.now();
        self.submit_at(now.date(), now.time(), distance_km, duration_min, weight_kg, target_km)
    }

    pub fn submit_request(&mut self, req: &SubmitRequest) -> Result<WorkoutEntry> {
        if let Err(e) = req.validate() {
            warn!("rejected request: {e}");
            self.telemetry.record_rejection();
            return Err(e);
        }
        self.submit(req.distance_km, req.duration_min, req.weight_kg, req.target_km)
    }

    /// Som `submit`, men med eksplisitt dato og klokkeslett.
    pub fn submit_at(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        distance_km: f64,
        duration_min: f64,
        weight_kg: f64,
        target_km: Option<f64>,
    ) -> Result<WorkoutEntry> {
        // 1) Valider alt før noe muteres
        let validated = WorkoutMetrics::compute(distance_km, duration_min, weight_kg).and_then(|m| {
            match target_km {
                Some(t) => require_positive("target_km", t).map(|t| (m, Some(t))),
                None => Ok((m, None)),
            }
        });
        let (metrics, target_km) = match validated {
            Ok(v) => v,
            Err(e) => {
                warn!("rejected submission for {date}: {e}");
                self.telemetry.record_rejection();
                return Err(e);
            }
        };

        // 2) Løs opp dagens mål
        let target = self.resolve_target(date, target_km);

        // 3) Akkumuler distanse
        let record = self.daily.entry(date).or_insert_with(|| DailyRecord::new(date));
        record.cumulative_km += distance_km;
        let cumulative = record.cumulative_km;

        // 4) Fryst snapshot i dagens liste
        let entry = WorkoutEntry::new(time, distance_km, duration_min, metrics, target, cumulative);
        let entries = self.history.entry(date).or_default();
        entries.push(entry.clone());
        self.latest = Some((date, entries.len() - 1));
        self.telemetry.record_submission(distance_km);

        debug!(
            "logged {:.2} km on {date} (pace {:.2} min/km, total {:.2}/{:.2} km)",
            distance_km,
            entry.pace_min_per_km(),
            cumulative,
            target
        );
        Ok(entry)
    }

    /// (a) eksplisitt mål, (b) dagens mål, (c) sist kjente mål, (d) 0.
    fn resolve_target(&mut self, date: NaiveDate, explicit: Option<f64>) -> f64 {
        if let Some(t) = explicit {
            let record = self.daily.entry(date).or_insert_with(|| DailyRecord::new(date));
            if let Some(old) = record.target_km.filter(|old| *old != t) {
                info!("target for {date} changed from {old} to {t} km");
            }
            record.target_km = Some(t);
            self.last_known_target = Some(t);
            return t;
        }

        if let Some(t) = self.daily.get(&date).and_then(|r| r.target_km) {
            return t;
        }

        match self.last_known_target {
            Some(t) if self.config.carry_forward_target => {
                self.daily
                    .entry(date)
                    .or_insert_with(|| DailyRecord::new(date))
                    .target_km = Some(t);
                debug!("carried target {t} km forward to {date}");
                t
            }
            _ => 0.0,
        }
    }

    /// Fremdrift for en dato. Uten mål blir target=0 og achieved=false.
    pub fn progress_for_date(&self, date: NaiveDate) -> DailyProgress {
        let (target, cumulative) = self
            .daily
            .get(&date)
            .map(|r| (r.target_or_zero(), r.cumulative_km))
            .unwrap_or((0.0, 0.0));
        DailyProgress::from_totals(date, target, cumulative)
    }

    pub fn progress_today(&self) -> DailyProgress {
        self.progress_for_date(self.clock.today())
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> &[WorkoutEntry] {
        self.history.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record_for_date(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.daily.get(&date)
    }

    /// Datoer med historikk, nyeste først.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.history.keys().rev().copied().collect()
    }

    /// Sist innsendte økt.
    pub fn latest(&self) -> Option<&WorkoutEntry> {
        let (date, idx) = self.latest?;
        self.history.get(&date)?.get(idx)
    }

    pub fn last_known_target(&self) -> Option<f64> {
        self.last_known_target
    }

    /// Dagsdetalj som tekstlinjer (samme format som historikkvinduet).
    pub fn day_summary(&self, date: NaiveDate) -> Vec<String> {
        let header = match self.daily.get(&date) {
            Some(DailyRecord { target_km: Some(t), cumulative_km, .. }) => {
                format!("Daily target: {t:?} km | Total distance: {cumulative_km:.1} km")
            }
            Some(r) => format!("Daily target: none | Total distance: {:.1} km", r.cumulative_km),
            None => "Daily target: none | Total distance: 0.0 km".to_string(),
        };
        std::iter::once(header)
            .chain(
                self.entries_for_date(date)
                    .iter()
                    .map(|e| e.summary_line(&self.config.time_format)),
            )
            .collect()
    }
}
