//! Facade crate for the splatcast risk engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! SQLite activity log behind a feature flag.

#![forbid(unsafe_code)]

pub use splatcast_core::{
    ActivityEntry, ActivityLog, ActivityLogError, AssessmentRecord, Condition,
    DEFAULT_HISTORY_CAPACITY, Location, LocationError, MonthOutOfRange, RiskAssessment,
    RiskHistory, RiskLevel, Season, UnknownCondition, UnknownRiskLevel, UnknownSeason,
    WeatherFetchError, WeatherProvider, WeatherSnapshot, WeatherSnapshotError, assess, base_risk,
};

#[cfg(feature = "log-sqlite")]
pub use splatcast_log::{LoggedActivity, SqliteActivityLog, SqliteActivityLogError};
