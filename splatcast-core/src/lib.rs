//! Core domain types and scoring engine for splatcast.
//!
//! These models provide basic validation to keep downstream
//! components honest. Constructors return `Result` to surface
//! invalid input early; the scoring pipeline in [`risk`] only
//! accepts validated values and is therefore infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use geo::Coord;
use thiserror::Error;

pub mod activity;
pub mod forecast;
pub mod history;
pub mod risk;
pub mod season;
pub mod weather;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::{ActivityEntry, ActivityLog, ActivityLogError};
pub use forecast::{WeatherFetchError, WeatherProvider};
pub use history::{AssessmentRecord, DEFAULT_HISTORY_CAPACITY, RiskHistory};
pub use risk::{RiskAssessment, RiskLevel, UnknownRiskLevel, assess, base_risk};
pub use season::{MonthOutOfRange, Season, UnknownSeason};
pub use weather::{Condition, UnknownCondition, WeatherSnapshot, WeatherSnapshotError};

/// A place a vehicle may be parked at.
///
/// Coordinates are validated on construction, so holders of a
/// `Location` may assume they are in range.
///
/// # Examples
///
/// ```
/// use splatcast_core::Location;
///
/// # fn main() -> Result<(), splatcast_core::LocationError> {
/// let spot = Location::new(40.0, -74.0, "Hoboken waterfront")?;
/// assert_eq!(spot.latitude(), 40.0);
/// assert_eq!(spot.longitude(), -74.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Geospatial position (`x` = longitude, `y` = latitude).
    pub position: Coord<f64>,
    /// Human-readable place name.
    pub name: String,
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    /// The latitude fell outside `-90..=90` degrees (or was not finite).
    #[error("latitude {latitude} is outside the valid range -90..=90")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        latitude: f64,
    },
    /// The longitude fell outside `-180..=180` degrees (or was not finite).
    #[error("longitude {longitude} is outside the valid range -180..=180")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        longitude: f64,
    },
}

impl Location {
    /// Validates coordinates and constructs a [`Location`].
    pub fn new(
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            position: Coord {
                x: longitude,
                y: latitude,
            },
            name: name.into(),
        })
    }

    /// Latitude in degrees, `-90..=90`.
    pub fn latitude(&self) -> f64 {
        self.position.y
    }

    /// Longitude in degrees, `-180..=180`.
    pub fn longitude(&self) -> f64 {
        self.position.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(Location::new(latitude, longitude, "edge").is_ok());
    }

    #[rstest]
    #[case(90.5)]
    #[case(-91.0)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_latitude(#[case] latitude: f64) {
        let result = Location::new(latitude, 0.0, "bad");
        assert!(matches!(
            result,
            Err(LocationError::LatitudeOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(180.5)]
    #[case(-200.0)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_longitude(#[case] longitude: f64) {
        let result = Location::new(0.0, longitude, "bad");
        assert!(matches!(
            result,
            Err(LocationError::LongitudeOutOfRange { .. })
        ));
    }

    #[rstest]
    fn position_maps_axes_to_coordinates() {
        let spot = Location::new(51.5, -0.13, "London").unwrap();
        assert_eq!(spot.position.x, spot.longitude());
        assert_eq!(spot.position.y, spot.latitude());
    }
}
