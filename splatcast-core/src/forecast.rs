//! Fetch weather snapshots for a location.
//!
//! The `WeatherProvider` trait abstracts the retrieval of a
//! [`WeatherSnapshot`] for a [`Location`]. Implementations may call a
//! live service or synthesise conditions; the engine never depends on a
//! concrete transport, and tests inject deterministic fixtures.
//!
//! Timeout and retry policy belongs to implementations or their callers,
//! never to the scoring engine.

use thiserror::Error;

use crate::{Location, WeatherSnapshot};

/// Errors from [`WeatherProvider::fetch_weather`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherFetchError {
    /// The provider could not produce a snapshot for the location.
    ///
    /// Callers should surface this as a retryable failure; a previously
    /// displayed assessment must not be invalidated by it.
    #[error("weather data is unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Supply the weather snapshot for an assessment.
///
/// # Examples
///
/// ```
/// use splatcast_core::{Condition, Location, WeatherSnapshot};
/// use splatcast_core::forecast::{WeatherFetchError, WeatherProvider};
///
/// struct ClearSkies;
///
/// impl WeatherProvider for ClearSkies {
///     fn fetch_weather(
///         &self,
///         _location: &Location,
///     ) -> Result<WeatherSnapshot, WeatherFetchError> {
///         WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0)
///             .map_err(|err| WeatherFetchError::Unavailable {
///                 reason: err.to_string(),
///             })
///     }
/// }
///
/// let spot = Location::new(40.0, -74.0, "Hoboken waterfront").unwrap();
/// let weather = ClearSkies.fetch_weather(&spot)?;
/// assert_eq!(weather.condition, Condition::Sunny);
/// # Ok::<(), WeatherFetchError>(())
/// ```
pub trait WeatherProvider {
    /// Return current conditions at `location`.
    fn fetch_weather(&self, location: &Location) -> Result<WeatherSnapshot, WeatherFetchError>;
}
