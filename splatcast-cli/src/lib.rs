//! Command-line interface for splatcast risk assessments.
//!
//! `assess` runs one assessment for a coordinate pair, with weather
//! either supplied manually or synthesised by the seeded simulator, and
//! optionally appends the outcome to the SQLite activity log. `logs`
//! prints the most recent activity-log rows for inspection.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use chrono::Utc;
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use splatcast_core::{
    ActivityEntry, ActivityLog, AssessmentRecord, Condition, Location, Season, WeatherProvider,
    WeatherSnapshot, assess,
};
use splatcast_log::SqliteActivityLog;

mod error;
pub mod simulate;

pub use error::CliError;
pub use simulate::SimulatedWeatherProvider;

const ENV_LATITUDE: &str = "SPLATCAST_CMDS_ASSESS_LATITUDE";
const ENV_LONGITUDE: &str = "SPLATCAST_CMDS_ASSESS_LONGITUDE";
const ENV_LOGS_DB: &str = "SPLATCAST_CMDS_LOGS_DB";

const DEFAULT_LOCATION_NAME: &str = "Unnamed location";
const DEFAULT_LOGS_LIMIT: usize = 20;

/// Run the splatcast CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Assess(args) => run_assess(args),
        Command::Logs(args) => run_logs(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "splatcast",
    about = "Estimate the risk of bird droppings hitting a parked vehicle",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess the risk for a coordinate pair.
    Assess(AssessArgs),
    /// Show recent entries from the activity log.
    Logs(LogsArgs),
}

/// CLI arguments for the `assess` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assess the bird-dropping risk for a location. Coordinates \
                 can come from CLI flags, configuration files, or \
                 environment variables. Weather is simulated unless all \
                 four weather options are given.",
    about = "Assess the bird-dropping risk for a location"
)]
#[ortho_config(prefix = "SPLATCAST")]
struct AssessArgs {
    /// Latitude in degrees, -90 to 90.
    #[arg(long, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    latitude: Option<f64>,
    /// Longitude in degrees, -180 to 180.
    #[arg(long, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    longitude: Option<f64>,
    /// Display name for the location.
    #[arg(long, value_name = "name")]
    #[serde(default)]
    name: Option<String>,
    /// Calendar month (1-12) used to resolve the season; defaults to the
    /// current month.
    #[arg(long, value_name = "month")]
    #[serde(default)]
    month: Option<u8>,
    /// Seed for the weather simulator; random when omitted.
    #[arg(long, value_name = "seed")]
    #[serde(default)]
    seed: Option<u64>,
    /// Manual weather: air temperature in degrees Fahrenheit.
    #[arg(long, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    temperature: Option<f64>,
    /// Manual weather: sky condition (sunny, cloudy, rainy, windy).
    #[arg(long, value_name = "label")]
    #[serde(default)]
    condition: Option<String>,
    /// Manual weather: wind speed in miles per hour.
    #[arg(long, value_name = "mph")]
    #[serde(default)]
    wind_speed: Option<f64>,
    /// Manual weather: accumulated precipitation in inches.
    #[arg(long, value_name = "inches")]
    #[serde(default)]
    precipitation: Option<f64>,
    /// Append the outcome to this SQLite activity log.
    #[arg(long = "log-db", value_name = "path")]
    #[serde(default)]
    log_db: Option<Utf8PathBuf>,
    /// Emit the full assessment record as JSON.
    #[arg(long)]
    #[serde(default)]
    json: bool,
}

impl AssessArgs {
    fn into_config(self) -> Result<AssessConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssessConfig::try_from(merged)
    }
}

/// Where the weather snapshot for an assessment comes from.
#[derive(Debug, Clone, PartialEq)]
enum WeatherSource {
    /// Synthesise conditions with the seeded simulator.
    Simulated {
        /// Explicit simulator seed, random when absent.
        seed: Option<u64>,
    },
    /// Use a fully specified snapshot.
    Manual(WeatherSnapshot),
}

#[derive(Debug, Clone, PartialEq)]
struct AssessConfig {
    location: Location,
    season: Season,
    weather: WeatherSource,
    log_db: Option<Utf8PathBuf>,
    json: bool,
}

impl TryFrom<AssessArgs> for AssessConfig {
    type Error = CliError;

    fn try_from(args: AssessArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: "latitude",
            env: ENV_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: "longitude",
            env: ENV_LONGITUDE,
        })?;
        let name = args
            .name
            .unwrap_or_else(|| DEFAULT_LOCATION_NAME.to_owned());
        let location = Location::new(latitude, longitude, name)?;

        let season = match args.month {
            Some(month) => Season::from_month(month)?,
            None => Season::for_date(&Utc::now()),
        };

        let weather = resolve_weather_source(
            args.temperature,
            args.condition.as_deref(),
            args.wind_speed,
            args.precipitation,
            args.seed,
        )?;

        Ok(Self {
            location,
            season,
            weather,
            log_db: args.log_db,
            json: args.json,
        })
    }
}

fn resolve_weather_source(
    temperature: Option<f64>,
    condition: Option<&str>,
    wind_speed: Option<f64>,
    precipitation: Option<f64>,
    seed: Option<u64>,
) -> Result<WeatherSource, CliError> {
    let any_given = temperature.is_some()
        || condition.is_some()
        || wind_speed.is_some()
        || precipitation.is_some();
    if !any_given {
        return Ok(WeatherSource::Simulated { seed });
    }

    let temperature = temperature.ok_or(CliError::IncompleteWeather {
        field: "temperature",
    })?;
    let condition = condition
        .ok_or(CliError::IncompleteWeather { field: "condition" })?
        .parse::<Condition>()?;
    let wind_speed = wind_speed.ok_or(CliError::IncompleteWeather {
        field: "wind-speed",
    })?;
    let precipitation = precipitation.ok_or(CliError::IncompleteWeather {
        field: "precipitation",
    })?;

    let snapshot = WeatherSnapshot::new(temperature, condition, wind_speed, precipitation)?;
    Ok(WeatherSource::Manual(snapshot))
}

fn run_assess(args: AssessArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let record = perform_assessment(&config)?;

    if config.json {
        let rendered = serde_json::to_string_pretty(&record).map_err(CliError::RenderJson)?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&record));
    }
    Ok(())
}

/// Fetch weather, score the location, and (best-effort) log the outcome.
///
/// Activity logging is fire-and-forget: a failure is reported on stderr
/// but never discards the computed assessment.
fn perform_assessment(config: &AssessConfig) -> Result<AssessmentRecord, CliError> {
    let weather = match &config.weather {
        WeatherSource::Manual(snapshot) => snapshot.clone(),
        WeatherSource::Simulated { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            SimulatedWeatherProvider::new(config.season, seed)
                .fetch_weather(&config.location)?
        }
    };

    let assessment = assess(&config.location, &weather, config.season);
    let timestamp = Utc::now();
    let record = AssessmentRecord {
        id: u64::try_from(timestamp.timestamp_millis()).unwrap_or_default(),
        location: config.location.clone(),
        timestamp,
        weather,
        season: config.season,
        assessment,
    };

    if let Some(path) = &config.log_db {
        match SqliteActivityLog::open(path) {
            Ok(log) => {
                if let Err(err) = log.record(&ActivityEntry::from_record(&record)) {
                    eprintln!("splatcast: warning: assessment not logged: {err}");
                }
            }
            Err(err) => {
                eprintln!("splatcast: warning: could not open activity log: {err}");
            }
        }
    }

    Ok(record)
}

fn render_report(record: &AssessmentRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({:.4}, {:.4})\n",
        record.location.name,
        record.location.latitude(),
        record.location.longitude()
    ));
    out.push_str(&format!(
        "{}\n",
        record.timestamp.format("%a, %b %-d, %-I:%M %p")
    ));
    out.push_str(&format!(
        "{} | {} | {:.0}F | wind {:.0} mph | rain {:.2} in\n\n",
        record.season,
        record.weather.condition,
        record.weather.temperature,
        record.weather.wind_speed,
        record.weather.precipitation
    ));
    out.push_str(&format!(
        "Risk: {:.1}/10 ({})\n",
        record.assessment.score, record.assessment.level
    ));
    for factor in &record.assessment.factors {
        out.push_str(&format!("  - {factor}\n"));
    }
    out
}

/// CLI arguments for the `logs` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show recent entries from the activity log")]
#[ortho_config(prefix = "SPLATCAST")]
struct LogsArgs {
    /// Path to the SQLite activity log.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    db: Option<Utf8PathBuf>,
    /// Maximum number of entries to show.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    limit: Option<usize>,
}

impl LogsArgs {
    fn into_config(self) -> Result<LogsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LogsConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogsConfig {
    db: Utf8PathBuf,
    limit: usize,
}

impl TryFrom<LogsArgs> for LogsConfig {
    type Error = CliError;

    fn try_from(args: LogsArgs) -> Result<Self, Self::Error> {
        let db = args.db.ok_or(CliError::MissingArgument {
            field: "db",
            env: ENV_LOGS_DB,
        })?;
        Ok(Self {
            db,
            limit: args.limit.unwrap_or(DEFAULT_LOGS_LIMIT),
        })
    }
}

fn run_logs(args: LogsArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let log = SqliteActivityLog::open(&config.db)?;
    let entries = log.recent(config.limit)?;

    if entries.is_empty() {
        println!("no activity recorded");
        return Ok(());
    }
    for row in entries {
        println!(
            "{}  {}  {:.0}F  wind {:.0} mph  {}",
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row.location,
            row.temperature,
            row.wind_speed,
            row.risk_level
        );
    }
    Ok(())
}
