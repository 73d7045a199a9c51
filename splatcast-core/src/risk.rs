//! Bird-dropping risk scoring.
//!
//! [`assess`] maps a validated location, a weather snapshot, and a season
//! to a score on a 1–10 scale, a discrete [`RiskLevel`], and an ordered
//! list of human-readable contributing factors. The computation is pure
//! and deterministic: identical inputs always produce identical output,
//! so it may be called concurrently without coordination.
//!
//! Scoring runs in three stages: a location-only base risk, a fixed
//! sequence of multiplicative adjustments (season, sky condition,
//! temperature, wind, precipitation), and a final clamp onto the 1–10
//! scale. The location heuristics — coastal longitude bands and a
//! latitude-derived urban-density proxy — are acknowledged
//! simplifications with no geographic authority; they are kept exactly
//! as documented because downstream behaviour is pinned to them.

use geo::Coord;
use thiserror::Error;

use crate::{Condition, Location, Season, WeatherSnapshot};

/// Discrete, human-readable risk category derived from the final score.
///
/// # Examples
/// ```
/// use splatcast_core::RiskLevel;
///
/// assert_eq!(RiskLevel::from_score(4.5), RiskLevel::Moderate);
/// assert_eq!(RiskLevel::Moderate.as_str(), "moderate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Score below 3.
    #[cfg_attr(feature = "serde", serde(rename = "very low"))]
    VeryLow,
    /// Score in `3.0..4.5`.
    Low,
    /// Score in `4.5..6.5`.
    Moderate,
    /// Score in `6.5..8.0`.
    High,
    /// Score of 8 or above.
    #[cfg_attr(feature = "serde", serde(rename = "very high"))]
    VeryHigh,
}

impl RiskLevel {
    /// Map a final score onto its risk band.
    ///
    /// Bands are half-open on the lower bound: a score equal to a
    /// boundary belongs to the band above it.
    pub fn from_score(score: f64) -> Self {
        if score < 3.0 {
            Self::VeryLow
        } else if score < 4.5 {
            Self::Low
        } else if score < 6.5 {
            Self::Moderate
        } else if score < 8.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Return the level as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised risk level label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown risk level '{0}'")]
pub struct UnknownRiskLevel(pub String);

impl std::str::FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "very low" => Ok(Self::VeryLow),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "very high" => Ok(Self::VeryHigh),
            _ => Err(UnknownRiskLevel(s.to_owned())),
        }
    }
}

/// Outcome of one risk assessment.
///
/// `factors` always holds exactly six entries, one per pipeline stage,
/// in evaluation order: location descriptor, season, sky condition,
/// temperature, wind, precipitation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskAssessment {
    /// Final risk score, clamped to `1.0..=10.0`.
    pub score: f64,
    /// Risk band for `score`.
    pub level: RiskLevel,
    /// Human-readable explanation of each pipeline stage, in order.
    pub factors: Vec<String>,
}

/// A single multiplicative adjustment with its explanation.
struct Impact {
    multiplier: f64,
    reason: &'static str,
}

/// Location-only risk estimate on a 1–9 scale, before any weather or
/// seasonal adjustment.
///
/// Deterministic in the coordinates: the trigonometric perturbation is a
/// smooth spatial variation, not randomness.
pub fn base_risk(position: Coord<f64>) -> f64 {
    let latitude = position.y;
    let longitude = position.x;

    let mut risk = 5.0;

    // Longitude bands standing in for ocean proximity. The second band
    // wraps the antimeridian, so 180 and -180 both qualify.
    let coastal = (longitude > -10.0 && longitude < 10.0)
        || longitude > 170.0
        || longitude < -170.0
        || (longitude > 80.0 && longitude < 100.0)
        || (longitude > -120.0 && longitude < -70.0);
    if coastal {
        risk += 1.5;
    }

    // Urban-density proxy: a pure function of latitude, not a land-use
    // lookup.
    if latitude.abs() % 5.0 < 2.5 {
        risk += 1.0;
    }

    // Temperate band of either hemisphere.
    if (latitude > 30.0 && latitude < 60.0) || (latitude < -30.0 && latitude > -60.0) {
        risk += 0.5;
    }

    // Smooth spatial perturbation; coordinates are treated as radians.
    risk += 0.5 * ((latitude * 3.0).sin() + (longitude * 2.0).cos());

    risk.clamp(1.0, 9.0)
}

fn base_reason(base: f64) -> &'static str {
    if base > 6.0 {
        "Your location has above-average bird activity"
    } else if base < 4.0 {
        "Your location has below-average bird activity"
    } else {
        "Your location has average bird activity"
    }
}

fn season_impact(season: Season) -> Impact {
    match season {
        Season::Spring => Impact {
            multiplier: 1.3,
            reason: "Spring migration and nesting season increases bird activity",
        },
        Season::Summer => Impact {
            multiplier: 1.1,
            reason: "High feeding activity and juvenile birds present",
        },
        Season::Fall => Impact {
            multiplier: 1.2,
            reason: "Fall migration patterns increase bird movement",
        },
        Season::Winter => Impact {
            multiplier: 0.7,
            reason: "Reduced bird activity in colder temperatures",
        },
    }
}

fn condition_impact(condition: Condition) -> Impact {
    match condition {
        Condition::Sunny => Impact {
            multiplier: 1.2,
            reason: "Increased bird activity in clear weather",
        },
        Condition::Cloudy => Impact {
            multiplier: 1.0,
            reason: "Normal bird activity levels",
        },
        Condition::Rainy => Impact {
            multiplier: 0.6,
            reason: "Reduced flight activity during precipitation",
        },
        Condition::Windy => Impact {
            multiplier: 0.8,
            reason: "Wind makes precise targeting more difficult for birds",
        },
    }
}

fn temperature_impact(temperature: f64) -> Impact {
    if temperature < 32.0 {
        Impact {
            multiplier: 0.6,
            reason: "Very cold temperatures reduce bird activity",
        }
    } else if temperature < 45.0 {
        Impact {
            multiplier: 0.8,
            reason: "Cold temperatures somewhat reduce bird activity",
        }
    } else if temperature > 90.0 {
        Impact {
            multiplier: 0.9,
            reason: "Very hot temperatures slightly reduce bird activity",
        }
    } else if temperature > 65.0 && temperature <= 85.0 {
        Impact {
            multiplier: 1.2,
            reason: "Ideal temperatures increase bird activity",
        }
    } else {
        Impact {
            multiplier: 1.0,
            reason: "Moderate temperatures have normal bird activity",
        }
    }
}

fn wind_impact(wind_speed: f64) -> Impact {
    if wind_speed > 20.0 {
        Impact {
            multiplier: 0.5,
            reason: "Strong winds significantly reduce precision of bird droppings",
        }
    } else if wind_speed > 10.0 {
        Impact {
            multiplier: 0.8,
            reason: "Moderate winds reduce precision of bird droppings",
        }
    } else {
        Impact {
            multiplier: 1.0,
            reason: "Light winds have minimal impact on bird droppings",
        }
    }
}

fn precipitation_impact(precipitation: f64) -> Impact {
    if precipitation > 0.5 {
        Impact {
            multiplier: 0.4,
            reason: "Heavy precipitation keeps most birds sheltered",
        }
    } else if precipitation > 0.0 {
        Impact {
            multiplier: 0.7,
            reason: "Light precipitation reduces bird activity",
        }
    } else {
        Impact {
            multiplier: 1.0,
            reason: "No precipitation impact on bird activity",
        }
    }
}

/// Assess the bird-dropping risk for a parked vehicle.
///
/// Pure and synchronous; the only inputs are the arguments and the only
/// output is the returned [`RiskAssessment`].
///
/// # Examples
///
/// ```
/// use splatcast_core::{Condition, Location, Season, WeatherSnapshot, assess};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let spot = Location::new(40.0, -74.0, "Hoboken waterfront")?;
/// let weather = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0)?;
/// let result = assess(&spot, &weather, Season::Spring);
/// assert!((1.0..=10.0).contains(&result.score));
/// assert_eq!(result.factors.len(), 6);
/// # Ok(())
/// # }
/// ```
pub fn assess(location: &Location, weather: &WeatherSnapshot, season: Season) -> RiskAssessment {
    let base = base_risk(location.position);

    let mut factors = Vec::with_capacity(6);
    factors.push(base_reason(base).to_owned());

    let adjustments = [
        season_impact(season),
        condition_impact(weather.condition),
        temperature_impact(weather.temperature),
        wind_impact(weather.wind_speed),
        precipitation_impact(weather.precipitation),
    ];

    let mut score = base;
    for impact in adjustments {
        score *= impact.multiplier;
        factors.push(impact.reason.to_owned());
    }

    let score = score.clamp(1.0, 10.0);
    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.99, RiskLevel::VeryLow)]
    #[case(3.0, RiskLevel::Low)]
    #[case(4.49, RiskLevel::Low)]
    #[case(4.5, RiskLevel::Moderate)]
    #[case(6.49, RiskLevel::Moderate)]
    #[case(6.5, RiskLevel::High)]
    #[case(7.99, RiskLevel::High)]
    #[case(8.0, RiskLevel::VeryHigh)]
    #[case(1.0, RiskLevel::VeryLow)]
    #[case(10.0, RiskLevel::VeryHigh)]
    fn level_band_boundaries(#[case] score: f64, #[case] expected: RiskLevel) {
        assert_eq!(RiskLevel::from_score(score), expected);
    }

    #[rstest]
    #[case(31.9, 0.6)]
    #[case(32.0, 0.8)]
    #[case(44.9, 0.8)]
    #[case(45.0, 1.0)]
    #[case(65.0, 1.0)]
    #[case(65.1, 1.2)]
    #[case(85.0, 1.2)]
    #[case(85.1, 1.0)]
    #[case(90.0, 1.0)]
    #[case(90.1, 0.9)]
    fn temperature_band_edges(#[case] temperature: f64, #[case] expected: f64) {
        assert_eq!(temperature_impact(temperature).multiplier, expected);
    }

    #[rstest]
    #[case(10.0, 1.0)]
    #[case(10.1, 0.8)]
    #[case(20.0, 0.8)]
    #[case(20.1, 0.5)]
    fn wind_band_edges(#[case] wind_speed: f64, #[case] expected: f64) {
        assert_eq!(wind_impact(wind_speed).multiplier, expected);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.01, 0.7)]
    #[case(0.5, 0.7)]
    #[case(0.51, 0.4)]
    fn precipitation_band_edges(#[case] precipitation: f64, #[case] expected: f64) {
        assert_eq!(precipitation_impact(precipitation).multiplier, expected);
    }

    #[rstest]
    #[case(0.0, true)] // prime meridian band
    #[case(9.99, true)]
    #[case(10.0, false)]
    #[case(-10.0, false)]
    #[case(45.0, false)]
    #[case(180.0, true)] // antimeridian wraparound
    #[case(-180.0, true)]
    #[case(170.0, false)]
    #[case(90.0, true)]
    #[case(100.0, false)]
    #[case(-74.0, true)]
    #[case(-70.0, false)]
    #[case(-120.0, false)]
    fn coastal_band_membership(#[case] longitude: f64, #[case] coastal: bool) {
        // Compare against the same point moved to a non-coastal longitude;
        // the +1.5 adjustment is the only difference at latitude 0 when the
        // perturbation term is factored out.
        let at = |lon: f64| {
            base_risk(Coord { x: lon, y: 0.0 }) - 0.5 * ((0.0f64).sin() + (lon * 2.0).cos())
        };
        let expected = if coastal { 7.5 } else { 6.0 };
        assert!((at(longitude) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn base_risk_stays_in_bounds_at_extremes() {
        for &(latitude, longitude) in &[
            (0.0, 0.0),
            (90.0, 180.0),
            (-90.0, -180.0),
            (40.0, -74.0),
            (-33.87, 151.21),
        ] {
            let risk = base_risk(Coord {
                x: longitude,
                y: latitude,
            });
            assert!((1.0..=9.0).contains(&risk));
        }
    }

    #[rstest]
    fn descriptor_follows_base_band() {
        assert_eq!(
            base_reason(6.01),
            "Your location has above-average bird activity"
        );
        assert_eq!(
            base_reason(3.99),
            "Your location has below-average bird activity"
        );
        assert_eq!(base_reason(4.0), "Your location has average bird activity");
        assert_eq!(base_reason(6.0), "Your location has average bird activity");
    }

    #[rstest]
    fn assessment_applies_multipliers_in_order() {
        let spot = Location::new(40.0, -74.0, "Hoboken waterfront").unwrap();
        let weather = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0).unwrap();

        let result = assess(&spot, &weather, Season::Spring);

        let expected = (base_risk(spot.position) * 1.3 * 1.2 * 1.2 * 1.0 * 1.0).clamp(1.0, 10.0);
        assert_eq!(result.score, expected);
        assert_eq!(result.level, RiskLevel::from_score(expected));
        assert_eq!(
            result.factors,
            vec![
                "Your location has above-average bird activity".to_owned(),
                "Spring migration and nesting season increases bird activity".to_owned(),
                "Increased bird activity in clear weather".to_owned(),
                "Ideal temperatures increase bird activity".to_owned(),
                "Light winds have minimal impact on bird droppings".to_owned(),
                "No precipitation impact on bird activity".to_owned(),
            ]
        );
    }

    #[rstest]
    fn heavier_precipitation_strictly_lowers_the_score() {
        let spot = Location::new(40.0, -74.0, "Hoboken waterfront").unwrap();
        let dry = WeatherSnapshot::new(55.0, Condition::Cloudy, 5.0, 0.0).unwrap();
        let drizzle = WeatherSnapshot::new(55.0, Condition::Cloudy, 5.0, 0.2).unwrap();
        let downpour = WeatherSnapshot::new(55.0, Condition::Cloudy, 5.0, 0.8).unwrap();

        let score = |weather| assess(&spot, weather, Season::Winter).score;
        assert!(score(&dry) > score(&drizzle));
        assert!(score(&drizzle) > score(&downpour));
    }

    #[rstest]
    fn assessment_is_deterministic() {
        let spot = Location::new(-33.87, 151.21, "Sydney").unwrap();
        let weather = WeatherSnapshot::new(48.0, Condition::Windy, 14.0, 0.3).unwrap();

        let first = assess(&spot, &weather, Season::Fall);
        let second = assess(&spot, &weather, Season::Fall);

        assert_eq!(first.score.to_bits(), second.score.to_bits());
        assert_eq!(first.level, second.level);
        assert_eq!(first.factors, second.factors);
    }

    #[rstest]
    fn extreme_multipliers_never_escape_the_scale() {
        // Winter, rain, cold, gale, downpour: every multiplier below 1.
        let spot = Location::new(72.0, 45.0, "inland arctic").unwrap();
        let grim = WeatherSnapshot::new(10.0, Condition::Rainy, 30.0, 2.0).unwrap();
        let result = assess(&spot, &grim, Season::Winter);
        assert!(result.score >= 1.0);

        // Spring, sun, ideal warmth at a high-base location: every
        // multiplier above or equal to 1.
        let busy = Location::new(40.0, 0.0, "coastal city").unwrap();
        let fine = WeatherSnapshot::new(75.0, Condition::Sunny, 2.0, 0.0).unwrap();
        let sunny_day = assess(&busy, &fine, Season::Spring);
        assert!(sunny_day.score <= 10.0);
    }
}
