//! Unit tests covering the density and meal commands.

use super::helpers::Workspace;
use super::*;
use crate::density::{DensityEntry, run_density_with};
use crate::meal::{MealConfig, run_meal_with};
use camino::Utf8PathBuf;
use nutrimatch_core::MealType;
use rstest::rstest;

#[rstest]
fn density_lists_every_food() {
    let workspace = Workspace::with_sample();
    let args = DensityArgs {
        catalog: Some(workspace.catalog()),
    };
    let mut stdout = Vec::new();
    run_density_with(args, &mut stdout).expect("density succeeds");
    let entries: Vec<DensityEntry> = serde_json::from_slice(&stdout).expect("density JSON");
    assert_eq!(entries.len(), 10);
    let broccoli = entries
        .iter()
        .find(|entry| entry.name == "Brocoli")
        .expect("broccoli listed");
    assert_eq!(broccoli.density_score, 10.0);
    let banana = entries
        .iter()
        .find(|entry| entry.name == "Banane")
        .expect("banana listed");
    assert_eq!(banana.density_score, 0.0);
}

#[rstest]
fn density_requires_a_catalog() {
    let mut stdout = Vec::new();
    let err = run_density_with(DensityArgs::default(), &mut stdout)
        .expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_DENSITY_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn meal_type_defaults_to_lunch() {
    let args = MealArgs {
        target_path: Some(Utf8PathBuf::from("target.json")),
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        meal_type: None,
    };
    let config = MealConfig::try_from(args).expect("config should build");
    assert_eq!(config.meal_type, MealType::Lunch);
}

#[rstest]
#[case("breakfast", &["main", "side", "fruit"])]
#[case("snack", &["main", "fruit"])]
fn meal_prints_one_component_per_slot(#[case] meal: &str, #[case] slots: &[&str]) {
    let workspace = Workspace::with_sample();
    let cli = Cli::try_parse_from([
        "nutrimatch",
        "meal",
        workspace.target().as_str(),
        "--catalog",
        workspace.catalog().as_str(),
        "--meal-type",
        meal,
    ])
    .expect("arguments parse");
    let Command::Meal(args) = cli.command else {
        panic!("expected meal command");
    };
    let mut stdout = Vec::new();
    run_meal_with(args, &mut stdout).expect("meal succeeds");

    let plan: serde_json::Value = serde_json::from_slice(&stdout).expect("meal JSON");
    assert_eq!(plan.get("meal_type").and_then(|v| v.as_str()), Some(meal));
    let components = plan
        .get("components")
        .and_then(|v| v.as_array())
        .expect("components array");
    let printed: Vec<&str> = components
        .iter()
        .filter_map(|component| component.get("slot").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(printed, slots);
    for component in components {
        let foods = component
            .get("foods")
            .and_then(|v| v.as_array())
            .expect("foods array");
        assert_eq!(foods.len(), nutrimatch_ranker::FOODS_PER_SLOT);
    }
}
