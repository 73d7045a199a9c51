//! Behavioural coverage for the assessment pipeline.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use splatcast_core::{
    Condition, Location, RiskAssessment, RiskLevel, Season, WeatherSnapshot, assess,
};

#[fixture]
fn location() -> RefCell<Location> {
    RefCell::new(Location::new(40.0, -74.0, "Hoboken waterfront").unwrap())
}

#[fixture]
fn weather() -> RefCell<WeatherSnapshot> {
    RefCell::new(WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0).unwrap())
}

#[fixture]
fn season() -> Cell<Season> {
    Cell::new(Season::Spring)
}

#[fixture]
fn outcome() -> RefCell<Option<RiskAssessment>> {
    RefCell::new(None)
}

#[given("a temperate coastal city with clear spring weather")]
fn given_clear_spring(
    #[from(weather)] weather: &RefCell<WeatherSnapshot>,
    #[from(season)] season: &Cell<Season>,
) {
    *weather.borrow_mut() = WeatherSnapshot::new(70.0, Condition::Sunny, 5.0, 0.0).unwrap();
    season.set(Season::Spring);
}

#[given("a temperate coastal city with heavy winter rain")]
fn given_winter_rain(
    #[from(weather)] weather: &RefCell<WeatherSnapshot>,
    #[from(season)] season: &Cell<Season>,
) {
    *weather.borrow_mut() = WeatherSnapshot::new(55.0, Condition::Rainy, 5.0, 0.8).unwrap();
    season.set(Season::Winter);
}

#[when("I assess the risk")]
fn when_assess(
    #[from(location)] location: &RefCell<Location>,
    #[from(weather)] weather: &RefCell<WeatherSnapshot>,
    #[from(season)] season: &Cell<Season>,
    #[from(outcome)] outcome: &RefCell<Option<RiskAssessment>>,
) {
    let location = location.borrow();
    let weather = weather.borrow();
    *outcome.borrow_mut() = Some(assess(&location, &weather, season.get()));
}

#[then("the score stays on the 1 to 10 scale with six factors")]
fn then_on_scale(#[from(outcome)] outcome: &RefCell<Option<RiskAssessment>>) {
    let outcome = outcome.borrow();
    let result = outcome.as_ref().expect("assessment should have run");
    assert!((1.0..=10.0).contains(&result.score));
    assert_eq!(result.factors.len(), 6);
}

#[then("the reported level is very low")]
fn then_very_low(#[from(outcome)] outcome: &RefCell<Option<RiskAssessment>>) {
    let outcome = outcome.borrow();
    let result = outcome.as_ref().expect("assessment should have run");
    assert_eq!(result.level, RiskLevel::VeryLow);
}

#[scenario(path = "tests/features/risk_assessment.feature", index = 0)]
fn clear_spring_day(
    location: RefCell<Location>,
    weather: RefCell<WeatherSnapshot>,
    season: Cell<Season>,
    outcome: RefCell<Option<RiskAssessment>>,
) {
    let _ = (location, weather, season, outcome);
}

#[scenario(path = "tests/features/risk_assessment.feature", index = 1)]
fn winter_downpour(
    location: RefCell<Location>,
    weather: RefCell<WeatherSnapshot>,
    season: Cell<Season>,
    outcome: RefCell<Option<RiskAssessment>>,
) {
    let _ = (location, weather, season, outcome);
}
