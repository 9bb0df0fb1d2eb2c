use std::fmt::Write;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::metrics::{require_positive, RoundTo, WorkoutMetrics};

const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// ISO-8601-dato (YYYY-MM-DD) fra grensesnittet.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TrackerError::invalid("date", s))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FMT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(FMT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, FMT).map_err(serde::de::Error::custom)
    }
}

/// Én logget løpeøkt. Alle avledede felt er fryst ved innsending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    #[serde(with = "hhmm")]
    timestamp: NaiveTime,
    distance_km: f64,
    duration_min: f64,
    pace_min_per_km: f64,
    speed_km_per_hr: f64,
    calories_burned: f64,
    target_km_for_day: f64,
    cumulative_distance_km_for_day: f64,
}

impl WorkoutEntry {
    pub(crate) fn new(
        timestamp: NaiveTime,
        distance_km: f64,
        duration_min: f64,
        metrics: WorkoutMetrics,
        target_km_for_day: f64,
        cumulative_distance_km_for_day: f64,
    ) -> Self {
        Self {
            timestamp,
            distance_km,
            duration_min,
            pace_min_per_km: metrics.pace_min_per_km,
            speed_km_per_hr: metrics.speed_km_per_hr,
            calories_burned: metrics.calories,
            target_km_for_day,
            cumulative_distance_km_for_day,
        }
    }

    pub fn timestamp(&self) -> NaiveTime { self.timestamp }
    pub fn distance_km(&self) -> f64 { self.distance_km }
    pub fn duration_min(&self) -> f64 { self.duration_min }
    pub fn pace_min_per_km(&self) -> f64 { self.pace_min_per_km }
    pub fn speed_km_per_hr(&self) -> f64 { self.speed_km_per_hr }
    pub fn calories_burned(&self) -> f64 { self.calories_burned }
    /// 0.0 betyr "ingen mål satt".
    pub fn target_km_for_day(&self) -> f64 { self.target_km_for_day }
    pub fn cumulative_distance_km_for_day(&self) -> f64 { self.cumulative_distance_km_for_day }

    /// Klokkeslett formatert med gitt chrono-format (typisk "%H:%M").
    /// Et format klokkeslettet ikke kan fylle gir "%H:%M".
    pub fn time_label(&self, fmt: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.timestamp.format(fmt)).is_err() {
            return self.timestamp.format(DEFAULT_TIME_FORMAT).to_string();
        }
        out
    }

    /// Én linje for dagsdetaljen: "07:30 | 5.0km | 30.0m | Pace 6.00 | 363 cal"
    pub fn summary_line(&self, fmt: &str) -> String {
        format!(
            "{} | {:?}km | {:?}m | Pace {:.2} | {} cal",
            self.time_label(fmt),
            self.distance_km,
            self.duration_min,
            self.pace_min_per_km,
            self.calories_burned.round_to(0)
        )
    }
}

/// Mål og akkumulert distanse for én kalenderdag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub target_km: Option<f64>,
    pub cumulative_km: f64,
}

impl DailyRecord {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self { date, target_km: None, cumulative_km: 0.0 }
    }

    pub fn target_or_zero(&self) -> f64 {
        self.target_km.unwrap_or(0.0)
    }
}

/// Fremdrift mot dagens mål.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub target: f64,
    pub cumulative_distance: f64,
    pub remaining: f64,
    pub percent: f64,
    pub achieved: bool,
}

impl DailyProgress {
    pub fn from_totals(date: NaiveDate, target: f64, cumulative_distance: f64) -> Self {
        let remaining = target - cumulative_distance;
        let percent = if target > 0.0 { cumulative_distance / target * 100.0 } else { 0.0 };
        Self {
            date,
            target,
            cumulative_distance,
            remaining,
            percent,
            achieved: target > 0.0 && remaining <= 0.0,
        }
    }

    pub fn has_target(&self) -> bool {
        self.target > 0.0
    }

    /// Hvor mye målet er passert med, hvis det er passert.
    pub fn excess_km(&self) -> Option<f64> {
        if self.has_target() && self.cumulative_distance > self.target {
            Some(self.cumulative_distance - self.target)
        } else {
            None
        }
    }
}

/// Innsending fra skjemaet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(alias = "distance", alias = "jarak")]
    pub distance_km: f64,
    #[serde(alias = "duration", alias = "waktu")]
    pub duration_min: f64,
    #[serde(alias = "weight", alias = "berat")]
    pub weight_kg: f64,
    #[serde(default, alias = "target", alias = "target_jarak")]
    pub target_km: Option<f64>,
}

impl SubmitRequest {
    /// Tolker de fire tekstfeltene. Tomt målfelt = ingen mål.
    pub fn parse(distance: &str, duration: &str, weight: &str, target: &str) -> Result<Self> {
        let target_km = match target.trim() {
            "" => None,
            t => Some(parse_field("target_km", t)?),
        };
        Ok(Self {
            distance_km: parse_field("distance_km", distance)?,
            duration_min: parse_field("duration_min", duration)?,
            weight_kg: parse_field("weight_kg", weight)?,
            target_km,
        })
    }

    /// Samme regler som `submit`: alt > 0, mål > 0 hvis gitt.
    pub fn validate(&self) -> Result<()> {
        require_positive("distance_km", self.distance_km)?;
        require_positive("duration_min", self.duration_min)?;
        require_positive("weight_kg", self.weight_kg)?;
        if let Some(t) = self.target_km {
            require_positive("target_km", t)?;
        }
        Ok(())
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TrackerError::invalid(field, raw))
}
