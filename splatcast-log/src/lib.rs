//! SQLite-backed activity logging for completed risk assessments.
//!
//! The log is a durable, append-only side channel: the orchestrating
//! layer submits a reduced view of each assessment (place name,
//! temperature, wind speed, risk level) after displaying it, keyed by an
//! auto-generated UTC timestamp. Reads return the most recent entries
//! first, which is the order an operator wants to inspect them in.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use splatcast_core::{ActivityEntry, RiskLevel};
//! use splatcast_log::SqliteActivityLog;
//!
//! # fn main() -> Result<(), splatcast_log::SqliteActivityLogError> {
//! let log = SqliteActivityLog::open(Utf8Path::new("artifacts/activity.db"))?;
//! let entry = ActivityEntry {
//!     location: "Hoboken waterfront".to_owned(),
//!     temperature: 70.0,
//!     wind_speed: 5.0,
//!     risk_level: RiskLevel::High,
//! };
//! log.append(&entry)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex};

use camino::Utf8Path;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use splatcast_core::{ActivityEntry, ActivityLog, ActivityLogError, RiskLevel};

mod error;

pub use error::SqliteActivityLogError;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS activity_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT NOT NULL,
        location TEXT NOT NULL,
        temperature REAL NOT NULL,
        wind_speed REAL NOT NULL,
        risk_level TEXT NOT NULL
    )";

const INSERT_SQL: &str = "INSERT INTO activity_logs \
     (timestamp, location, temperature, wind_speed, risk_level) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_RECENT_SQL: &str = "SELECT timestamp, location, temperature, wind_speed, risk_level \
     FROM activity_logs ORDER BY timestamp DESC, id DESC LIMIT ?1";

/// One row read back from the activity log, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedActivity {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Human-readable place name.
    pub location: String,
    /// Air temperature at assessment time.
    pub temperature: f64,
    /// Wind speed at assessment time.
    pub wind_speed: f64,
    /// Risk band of the assessment.
    pub risk_level: RiskLevel,
}

/// Append-only activity log stored in a `SQLite` database.
#[derive(Debug, Clone)]
pub struct SqliteActivityLog {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteActivityLog {
    /// Open (or create) the activity log at `path`.
    ///
    /// The schema is created when missing.
    ///
    /// # Errors
    /// Returns [`SqliteActivityLogError`] when the database cannot be
    /// opened or the schema cannot be created.
    pub fn open(path: &Utf8Path) -> Result<Self, SqliteActivityLogError> {
        let connection = Connection::open(path.as_std_path()).map_err(|source| {
            SqliteActivityLogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::with_connection(connection)
    }

    /// Open an in-memory activity log, useful for tests and dry runs.
    ///
    /// # Errors
    /// Returns [`SqliteActivityLogError`] when the in-memory database
    /// cannot be created.
    pub fn in_memory() -> Result<Self, SqliteActivityLogError> {
        let connection =
            Connection::open_in_memory().map_err(|source| SqliteActivityLogError::Query {
                operation: "open in-memory database",
                source,
            })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, SqliteActivityLogError> {
        connection
            .execute(CREATE_TABLE_SQL, [])
            .map_err(|source| SqliteActivityLogError::Query {
                operation: "create activity_logs table",
                source,
            })?;
        log::debug!("activity log schema ready");
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Append `entry` keyed by the current UTC time.
    ///
    /// # Errors
    /// Returns [`SqliteActivityLogError`] when the insert fails.
    pub fn append(&self, entry: &ActivityEntry) -> Result<(), SqliteActivityLogError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let connection = self
            .connection
            .lock()
            .map_err(|_| SqliteActivityLogError::ConnectionPoisoned)?;
        connection
            .execute(
                INSERT_SQL,
                (
                    timestamp.as_str(),
                    entry.location.as_str(),
                    entry.temperature,
                    entry.wind_speed,
                    entry.risk_level.as_str(),
                ),
            )
            .map_err(|source| SqliteActivityLogError::Query {
                operation: "insert activity entry",
                source,
            })?;
        Ok(())
    }

    /// Read back at most `limit` entries, newest first.
    ///
    /// # Errors
    /// Returns [`SqliteActivityLogError`] when the query fails or a
    /// stored row cannot be parsed back.
    pub fn recent(&self, limit: usize) -> Result<Vec<LoggedActivity>, SqliteActivityLogError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let connection = self
            .connection
            .lock()
            .map_err(|_| SqliteActivityLogError::ConnectionPoisoned)?;
        let mut statement = connection.prepare_cached(SELECT_RECENT_SQL).map_err(
            |source| SqliteActivityLogError::Query {
                operation: "prepare recent-activity query",
                source,
            },
        )?;

        let rows = statement
            .query_map([limit], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(|source| SqliteActivityLogError::Query {
                operation: "query recent activity",
                source,
            })?;

        let mut entries = Vec::new();
        for row in rows {
            let (raw_timestamp, location, temperature, wind_speed, raw_level) =
                row.map_err(|source| SqliteActivityLogError::Query {
                    operation: "read activity row",
                    source,
                })?;
            let timestamp = DateTime::parse_from_rfc3339(&raw_timestamp)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|source| SqliteActivityLogError::InvalidTimestamp {
                    raw: raw_timestamp,
                    source,
                })?;
            let risk_level =
                raw_level
                    .parse::<RiskLevel>()
                    .map_err(|source| SqliteActivityLogError::InvalidRiskLevel {
                        raw: raw_level.clone(),
                        source,
                    })?;
            entries.push(LoggedActivity {
                timestamp,
                location,
                temperature,
                wind_speed,
                risk_level,
            });
        }

        Ok(entries)
    }
}

impl ActivityLog for SqliteActivityLog {
    fn record(&self, entry: &ActivityEntry) -> Result<(), ActivityLogError> {
        self.append(entry).map_err(|err| {
            log::warn!("activity log write failed: {err}");
            ActivityLogError::Storage {
                reason: err.to_string(),
            }
        })
    }
}
