//! Error types emitted by the splatcast CLI.

use std::sync::Arc;

use splatcast_core::{
    LocationError, MonthOutOfRange, UnknownCondition, WeatherFetchError, WeatherSnapshotError,
};
use splatcast_log::SqliteActivityLogError;
use thiserror::Error;

/// Errors emitted by the splatcast CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// CLI flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// Manual weather entry was started but left incomplete.
    #[error("manual weather needs --temperature, --condition, --wind-speed, and --precipitation; missing --{field}")]
    IncompleteWeather {
        /// CLI flag name of the missing weather component.
        field: &'static str,
    },
    /// Coordinates were out of range.
    #[error(transparent)]
    InvalidCoordinates(#[from] LocationError),
    /// The month was outside the calendar.
    #[error(transparent)]
    InvalidMonth(#[from] MonthOutOfRange),
    /// The sky condition label was not recognised.
    #[error(transparent)]
    InvalidCondition(#[from] UnknownCondition),
    /// The manual weather values failed validation.
    #[error(transparent)]
    InvalidWeather(#[from] WeatherSnapshotError),
    /// The weather provider could not produce a snapshot.
    #[error(transparent)]
    WeatherFetch(#[from] WeatherFetchError),
    /// The activity log database could not be opened or read.
    #[error("activity log failure")]
    ActivityLog(#[from] SqliteActivityLogError),
    /// Serialising the JSON report failed.
    #[error("failed to render JSON output")]
    RenderJson(#[source] serde_json::Error),
}
