pub mod clock;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod plan;
pub mod telemetry;
pub mod tracker;

#[cfg(feature = "python")]
pub mod py;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_config, save_config, TrackerConfig};
pub use error::{Result, TrackerError};
pub use metrics::{
    calories_burned, pace_min_per_km, speed_km_per_hr, RoundTo, WorkoutMetrics, CALORIE_FACTOR,
};
pub use models::{
    format_date, parse_date, DailyProgress, DailyRecord, SubmitRequest, WorkoutEntry,
};
pub use telemetry::Telemetry;
pub use tracker::WorkoutTracker;
