//! Weather observations used as scoring input.
//!
//! A [`WeatherSnapshot`] captures the conditions at one location at one
//! moment. Units are a contract rather than an enforced property: degrees
//! Fahrenheit, miles per hour, and inches of accumulated precipitation —
//! the scoring thresholds are calibrated to those units.

use thiserror::Error;

/// Sky condition label for a weather snapshot.
///
/// The enum offers compile-time safety for condition lookups; an
/// unrecognised label is rejected when parsing instead of silently
/// falling through to an undefined multiplier.
///
/// # Examples
/// ```
/// use splatcast_core::Condition;
///
/// assert_eq!(Condition::Sunny.as_str(), "sunny");
/// assert_eq!(Condition::Rainy.to_string(), "rainy");
/// assert!("foggy".parse::<Condition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Condition {
    /// Clear skies.
    Sunny,
    /// Overcast skies.
    Cloudy,
    /// Active precipitation.
    Rainy,
    /// Strong sustained wind.
    Windy,
}

impl Condition {
    /// Return the condition as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use splatcast_core::Condition;
    ///
    /// assert_eq!(Condition::Cloudy.as_str(), "cloudy");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Windy => "windy",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised condition label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown weather condition '{0}'")]
pub struct UnknownCondition(pub String);

impl std::str::FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(Self::Sunny),
            "cloudy" => Ok(Self::Cloudy),
            "rainy" => Ok(Self::Rainy),
            "windy" => Ok(Self::Windy),
            _ => Err(UnknownCondition(s.to_owned())),
        }
    }
}

/// Weather conditions at a single location and moment.
///
/// Immutable once constructed; callers hand a snapshot to the engine for
/// one assessment and the engine never mutates it.
///
/// # Examples
///
/// ```
/// use splatcast_core::{Condition, WeatherSnapshot};
///
/// # fn main() -> Result<(), splatcast_core::WeatherSnapshotError> {
/// let weather = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0)?;
/// assert_eq!(weather.condition, Condition::Sunny);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherSnapshot {
    /// Air temperature in degrees Fahrenheit.
    pub temperature: f64,
    /// Sky condition label.
    pub condition: Condition,
    /// Sustained wind speed in miles per hour, non-negative.
    pub wind_speed: f64,
    /// Accumulated precipitation in inches, non-negative.
    pub precipitation: f64,
}

/// Errors returned by [`WeatherSnapshot::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeatherSnapshotError {
    /// The temperature was NaN or infinite.
    #[error("temperature {temperature} is not a finite number")]
    NonFiniteTemperature {
        /// The rejected temperature.
        temperature: f64,
    },
    /// The wind speed was negative, NaN, or infinite.
    #[error("wind speed {wind_speed} must be a finite, non-negative number")]
    InvalidWindSpeed {
        /// The rejected wind speed.
        wind_speed: f64,
    },
    /// The precipitation amount was negative, NaN, or infinite.
    #[error("precipitation {precipitation} must be a finite, non-negative number")]
    InvalidPrecipitation {
        /// The rejected precipitation amount.
        precipitation: f64,
    },
}

impl WeatherSnapshot {
    /// Validates and constructs a [`WeatherSnapshot`].
    pub fn new(
        temperature: f64,
        condition: Condition,
        wind_speed: f64,
        precipitation: f64,
    ) -> Result<Self, WeatherSnapshotError> {
        if !temperature.is_finite() {
            return Err(WeatherSnapshotError::NonFiniteTemperature { temperature });
        }
        if !wind_speed.is_finite() || wind_speed < 0.0 {
            return Err(WeatherSnapshotError::InvalidWindSpeed { wind_speed });
        }
        if !precipitation.is_finite() || precipitation < 0.0 {
            return Err(WeatherSnapshotError::InvalidPrecipitation { precipitation });
        }
        Ok(Self {
            temperature,
            condition,
            wind_speed,
            precipitation,
        })
    }
}
