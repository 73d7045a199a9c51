//! Calendar seasons driving the seasonal activity adjustment.
//!
//! The month-to-season mapping uses the northern-hemisphere convention
//! (March through May is spring, and so on). This is a documented
//! simplification carried over from the original product behaviour.

use chrono::Datelike;
use thiserror::Error;

/// One of the four calendar seasons.
///
/// # Examples
/// ```
/// use splatcast_core::Season;
///
/// assert_eq!(Season::Spring.as_str(), "spring");
/// assert_eq!(Season::from_month(10), Ok(Season::Fall));
/// assert!("monsoon".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Season {
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
    /// December through February.
    Winter,
}

impl Season {
    /// Return the season as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }

    /// Resolve the season for a 1-based calendar month.
    ///
    /// # Examples
    /// ```
    /// use splatcast_core::Season;
    ///
    /// assert_eq!(Season::from_month(1), Ok(Season::Winter));
    /// assert_eq!(Season::from_month(6), Ok(Season::Summer));
    /// assert!(Season::from_month(13).is_err());
    /// ```
    pub fn from_month(month: u8) -> Result<Self, MonthOutOfRange> {
        match month {
            3..=5 => Ok(Self::Spring),
            6..=8 => Ok(Self::Summer),
            9..=11 => Ok(Self::Fall),
            1 | 2 | 12 => Ok(Self::Winter),
            _ => Err(MonthOutOfRange { month }),
        }
    }

    /// Resolve the season for a calendar date.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use splatcast_core::Season;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
    /// assert_eq!(Season::for_date(&date), Season::Spring);
    /// ```
    pub fn for_date<D: Datelike>(date: &D) -> Self {
        match date.month() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Season::from_month`] for months outside `1..=12`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("month {month} is outside the valid range 1..=12")]
pub struct MonthOutOfRange {
    /// The rejected month.
    pub month: u8,
}

/// Error returned when parsing an unrecognised season label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown season '{0}'")]
pub struct UnknownSeason(pub String);

impl std::str::FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(UnknownSeason(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(1, Season::Winter)]
    #[case(2, Season::Winter)]
    #[case(3, Season::Spring)]
    #[case(5, Season::Spring)]
    #[case(6, Season::Summer)]
    #[case(8, Season::Summer)]
    #[case(9, Season::Fall)]
    #[case(11, Season::Fall)]
    #[case(12, Season::Winter)]
    fn month_table(#[case] month: u8, #[case] expected: Season) {
        assert_eq!(Season::from_month(month), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn rejects_month_outside_calendar(#[case] month: u8) {
        assert_eq!(Season::from_month(month), Err(MonthOutOfRange { month }));
    }

    #[rstest]
    fn date_resolution_agrees_with_month_table() {
        for month in 1..=12u8 {
            let date = NaiveDate::from_ymd_opt(2025, u32::from(month), 15).unwrap();
            assert_eq!(Some(Season::for_date(&date)), Season::from_month(month).ok());
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Season::from_str("monsoon").unwrap_err();
        assert_eq!(err, UnknownSeason("monsoon".to_owned()));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Season::Fall.to_string(), Season::Fall.as_str());
    }
}
