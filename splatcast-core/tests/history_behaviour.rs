//! Behavioural coverage for the bounded assessment history.

use chrono::{DateTime, Utc};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use splatcast_core::{
    AssessmentRecord, Condition, Location, RiskHistory, Season, WeatherSnapshot, assess,
};

fn record(id: u64) -> AssessmentRecord {
    let location = Location::new(40.0, -74.0, "Hoboken waterfront").unwrap();
    let weather = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0).unwrap();
    let assessment = assess(&location, &weather, Season::Spring);
    AssessmentRecord {
        id,
        location,
        timestamp: DateTime::<Utc>::UNIX_EPOCH,
        weather,
        season: Season::Spring,
        assessment,
    }
}

#[fixture]
fn records() -> RefCell<Vec<AssessmentRecord>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn history() -> RefCell<RiskHistory> {
    RefCell::new(RiskHistory::new())
}

#[given("eight completed assessments")]
fn given_eight(#[from(records)] records: &RefCell<Vec<AssessmentRecord>>) {
    *records.borrow_mut() = (0..8).map(record).collect();
}

#[when("each is pushed into a fresh history")]
fn when_pushed(
    #[from(records)] records: &RefCell<Vec<AssessmentRecord>>,
    #[from(history)] history: &RefCell<RiskHistory>,
) {
    let mut history = history.borrow_mut();
    for entry in records.borrow().iter().cloned() {
        history.push(entry);
    }
}

#[then("only the five newest remain, newest first")]
fn then_five_newest(#[from(history)] history: &RefCell<RiskHistory>) {
    let history = history.borrow();
    let ids: Vec<u64> = history.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
}

#[scenario(path = "tests/features/history.feature", index = 0)]
fn bounded_history(records: RefCell<Vec<AssessmentRecord>>, history: RefCell<RiskHistory>) {
    let _ = (records, history);
}
