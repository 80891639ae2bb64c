//! Behavioural tests for finding alternatives to a catalog food.

use nutrimatch_core::test_support::sample_catalog;
use nutrimatch_core::{AlternativesQuery, Recommendation};
use nutrimatch_ranker::RecommendationEngine;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn engine() -> RefCell<Option<RecommendationEngine>> {
    RefCell::new(None)
}

#[fixture]
fn results() -> RefCell<Vec<Recommendation>> {
    RefCell::new(Vec::new())
}

fn ask(
    engine: &RefCell<Option<RecommendationEngine>>,
    results: &RefCell<Vec<Recommendation>>,
    food_name: &str,
) {
    let query = AlternativesQuery::new(food_name).with_count(3);
    let found = engine
        .borrow()
        .as_ref()
        .expect("engine built")
        .find_alternatives(&query);
    *results.borrow_mut() = found;
}

#[given("the sample catalog")]
fn given_sample(#[from(engine)] engine: &RefCell<Option<RecommendationEngine>>) {
    let built = RecommendationEngine::new(sample_catalog()).expect("engine");
    *engine.borrow_mut() = Some(built);
}

#[when("I ask for 3 alternatives to \"poulet\"")]
fn when_chicken(
    #[from(engine)] engine: &RefCell<Option<RecommendationEngine>>,
    #[from(results)] results: &RefCell<Vec<Recommendation>>,
) {
    ask(engine, results, "poulet");
}

#[when("I ask for 3 alternatives to \"tofu\"")]
fn when_tofu(
    #[from(engine)] engine: &RefCell<Option<RecommendationEngine>>,
    #[from(results)] results: &RefCell<Vec<Recommendation>>,
) {
    ask(engine, results, "tofu");
}

#[then("the alternatives are salmon, eggs, and greek yoghurt")]
fn then_protein_swaps(#[from(results)] results: &RefCell<Vec<Recommendation>>) {
    let results = results.borrow();
    let names: Vec<&str> = results.iter().map(|r| r.food.name.as_str()).collect();
    assert_eq!(names, vec!["Saumon", "Œufs", "Yaourt grec"]);
}

#[then("the anchor food is not among them")]
fn then_anchor_absent(#[from(results)] results: &RefCell<Vec<Recommendation>>) {
    assert!(
        results.borrow().iter().all(|r| r.food.name != "Poulet grillé"),
        "anchor must not be its own alternative"
    );
}

#[then("no alternatives are returned")]
fn then_none(#[from(results)] results: &RefCell<Vec<Recommendation>>) {
    assert!(results.borrow().is_empty(), "expected no alternatives");
}

#[scenario(path = "tests/features/alternatives.feature", index = 0)]
fn scenario_chicken_alternatives(
    engine: RefCell<Option<RecommendationEngine>>,
    results: RefCell<Vec<Recommendation>>,
) {
    let _ = (engine, results);
}

#[scenario(path = "tests/features/alternatives.feature", index = 1)]
fn scenario_unknown_food(
    engine: RefCell<Option<RecommendationEngine>>,
    results: RefCell<Vec<Recommendation>>,
) {
    let _ = (engine, results);
}
