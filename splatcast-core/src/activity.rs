//! Durable activity logging for completed assessments.
//!
//! The `ActivityLog` trait is a fire-and-forget side channel: the
//! orchestrating layer submits a reduced view of each result after
//! displaying it, and a logging failure must never roll back or hide an
//! assessment the user has already seen.

use thiserror::Error;

use crate::{AssessmentRecord, RiskLevel};

/// The subset of an assessment persisted to durable storage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityEntry {
    /// Human-readable place name.
    pub location: String,
    /// Air temperature at assessment time.
    pub temperature: f64,
    /// Wind speed at assessment time.
    pub wind_speed: f64,
    /// Risk band of the assessment.
    pub risk_level: RiskLevel,
}

impl ActivityEntry {
    /// Reduce a full assessment record to its persisted fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use splatcast_core::{
    ///     ActivityEntry, AssessmentRecord, Condition, Location, Season, WeatherSnapshot, assess,
    /// };
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let location = Location::new(40.0, -74.0, "Hoboken waterfront")?;
    /// let weather = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0)?;
    /// let record = AssessmentRecord {
    ///     id: 1,
    ///     location: location.clone(),
    ///     timestamp: chrono::Utc::now(),
    ///     weather: weather.clone(),
    ///     season: Season::Spring,
    ///     assessment: assess(&location, &weather, Season::Spring),
    /// };
    /// let entry = ActivityEntry::from_record(&record);
    /// assert_eq!(entry.location, "Hoboken waterfront");
    /// assert_eq!(entry.temperature, 70.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_record(record: &AssessmentRecord) -> Self {
        Self {
            location: record.location.name.clone(),
            temperature: record.weather.temperature,
            wind_speed: record.weather.wind_speed,
            risk_level: record.assessment.level,
        }
    }
}

/// Errors from [`ActivityLog::record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityLogError {
    /// The backing store rejected or failed the write.
    #[error("failed to record activity: {reason}")]
    Storage {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Persist a reduced assessment view to durable storage.
///
/// Implementations generate their own timestamps; the caller supplies
/// only the entry fields.
pub trait ActivityLog {
    /// Append `entry` to the log.
    fn record(&self, entry: &ActivityEntry) -> Result<(), ActivityLogError>;
}
