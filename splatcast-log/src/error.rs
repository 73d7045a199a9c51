//! Error types raised by the SQLite activity log.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use splatcast_core::UnknownRiskLevel;
use thiserror::Error;

/// Errors raised while opening or using the SQLite activity log.
#[derive(Debug, Error)]
pub enum SqliteActivityLogError {
    /// Opening the `SQLite` database failed.
    #[error("failed to open SQLite database at {path}")]
    OpenDatabase {
        /// Requested database path.
        path: Utf8PathBuf,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a database statement failed.
    #[error("failed to {operation}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The connection mutex was poisoned by a panicking thread.
    #[error("activity log connection is no longer usable")]
    ConnectionPoisoned,
    /// A stored timestamp could not be parsed back.
    #[error("stored timestamp '{raw}' is not valid RFC 3339")]
    InvalidTimestamp {
        /// Raw value found in the database.
        raw: String,
        /// Source error from `chrono`.
        #[source]
        source: chrono::ParseError,
    },
    /// A stored risk level label was not recognised.
    #[error("stored risk level '{raw}' is not recognised")]
    InvalidRiskLevel {
        /// Raw value found in the database.
        raw: String,
        /// Source error from the label parser.
        #[source]
        source: UnknownRiskLevel,
    },
}
