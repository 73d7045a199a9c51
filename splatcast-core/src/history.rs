//! Session-scoped record keeping for completed assessments.
//!
//! [`RiskHistory`] is an explicit bounded collection owned by the calling
//! session. Each session constructs its own instance; there is no ambient
//! shared history. Records are immutable once appended and are only ever
//! evicted, never edited.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::{Location, RiskAssessment, Season, WeatherSnapshot};

/// Number of records a [`RiskHistory`] retains by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// One completed assessment, assembled by the caller.
///
/// The engine never produces records itself; the orchestrating layer
/// combines the engine output with the request context and a timestamp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssessmentRecord {
    /// Caller-assigned identity.
    pub id: u64,
    /// Where the assessment was made.
    pub location: Location,
    /// When the assessment completed.
    pub timestamp: DateTime<Utc>,
    /// Weather input used for the assessment.
    pub weather: WeatherSnapshot,
    /// Season input used for the assessment.
    pub season: Season,
    /// Engine output.
    pub assessment: RiskAssessment,
}

/// Bounded, most-recent-first collection of assessment records.
///
/// Pushing beyond capacity evicts the oldest entries. Iteration order is
/// completion order, newest first; callers that need submission order
/// must serialise their submissions themselves.
///
/// # Examples
///
/// ```
/// use splatcast_core::RiskHistory;
///
/// let history = RiskHistory::new();
/// assert!(history.is_empty());
/// assert_eq!(history.capacity(), splatcast_core::DEFAULT_HISTORY_CAPACITY);
/// ```
#[derive(Debug, Clone)]
pub struct RiskHistory {
    records: VecDeque<AssessmentRecord>,
    capacity: usize,
}

impl RiskHistory {
    /// Construct an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Construct an empty history retaining at most `capacity` records.
    ///
    /// A capacity of zero is raised to one so the latest record is always
    /// observable.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record as the most recent entry, evicting the oldest
    /// entries beyond capacity.
    pub fn push(&mut self, record: AssessmentRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// The most recently pushed record, if any.
    pub fn latest(&self) -> Option<&AssessmentRecord> {
        self.records.front()
    }

    /// Iterate over retained records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AssessmentRecord> {
        self.records.iter()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RiskHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RiskHistory {
    type Item = &'a AssessmentRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, AssessmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
