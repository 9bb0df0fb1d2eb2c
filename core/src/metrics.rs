use crate::error::{Result, TrackerError};

/// Empirisk kcal-faktor (kcal per kg per km). Ikke konfigurerbar.
pub const CALORIE_FACTOR: f64 = 1.036;

// --- RoundTo trait (offentlig, brukt til visning) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Pace = minutter / km
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Fart = km / min * 60 (km/t)
pub fn speed_km_per_hr(distance_km: f64, duration_min: f64) -> f64 {
    (distance_km / duration_min) * 60.0
}

/// kcal = km * kg * 1.036
pub fn calories_burned(distance_km: f64, weight_kg: f64) -> f64 {
    distance_km * weight_kg * CALORIE_FACTOR
}

/// Alle tall fra skjemaet må være endelige og > 0.
pub(crate) fn require_positive(field: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(TrackerError::invalid(field, v))
    }
}

/// Avledede verdier for én økt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutMetrics {
    pub pace_min_per_km: f64,
    pub speed_km_per_hr: f64,
    pub calories: f64,
}

impl WorkoutMetrics {
    /// Validerer input og regner ut pace, fart og kalorier.
    pub fn compute(distance_km: f64, duration_min: f64, weight_kg: f64) -> Result<Self> {
        let d = require_positive("distance_km", distance_km)?;
        let m = require_positive("duration_min", duration_min)?;
        let w = require_positive("weight_kg", weight_kg)?;

        Ok(Self {
            pace_min_per_km: pace_min_per_km(d, m),
            speed_km_per_hr: speed_km_per_hr(d, m),
            calories: calories_burned(d, w),
        })
    }
}
