//! Test-only, deterministic collaborator implementations used by unit and
//! behaviour tests.

use std::sync::Mutex;

use crate::{
    ActivityEntry, ActivityLog, ActivityLogError, Condition, Location, WeatherFetchError,
    WeatherProvider, WeatherSnapshot,
};

/// Deterministic `WeatherProvider` returning a fixed snapshot.
#[derive(Debug, Clone)]
pub struct FixedWeatherProvider {
    snapshot: WeatherSnapshot,
}

impl FixedWeatherProvider {
    /// Create a provider that always reports `snapshot`.
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Default for FixedWeatherProvider {
    /// A mild, dry, sunny day.
    fn default() -> Self {
        Self {
            snapshot: WeatherSnapshot {
                temperature: 70.0,
                condition: Condition::Sunny,
                wind_speed: 5.0,
                precipitation: 0.0,
            },
        }
    }
}

impl WeatherProvider for FixedWeatherProvider {
    fn fetch_weather(&self, _location: &Location) -> Result<WeatherSnapshot, WeatherFetchError> {
        Ok(self.snapshot.clone())
    }
}

/// `WeatherProvider` that always fails, for exercising error paths.
#[derive(Debug, Default, Copy, Clone)]
pub struct OfflineWeatherProvider;

impl WeatherProvider for OfflineWeatherProvider {
    fn fetch_weather(&self, _location: &Location) -> Result<WeatherSnapshot, WeatherFetchError> {
        Err(WeatherFetchError::Unavailable {
            reason: "simulated outage".to_owned(),
        })
    }
}

/// In-memory `ActivityLog` capturing entries for inspection.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Mutex<Vec<ActivityEntry>>,
}

impl MemoryActivityLog {
    /// Return a copy of the recorded entries, oldest first.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, entry: &ActivityEntry) -> Result<(), ActivityLogError> {
        let mut entries = self.entries.lock().map_err(|_| ActivityLogError::Storage {
            reason: "activity log mutex poisoned".to_owned(),
        })?;
        entries.push(entry.clone());
        Ok(())
    }
}
