//! Meal command implementation for the nutrimatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nutrimatch_core::{MealComponent, MealType};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::input::{load_engine, load_target};
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_MEAL_TYPE, ARG_TARGET, CliError, ENV_MEAL_CATALOG, ENV_MEAL_TARGET,
};

/// CLI arguments for the `meal` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Split a nutritional target across the slots of a meal \
                 (main, side, vegetable, fruit) and recommend foods for each \
                 slot.",
    about = "Compose a meal for a nutritional target"
)]
#[ortho_config(prefix = "NUTRIMATCH")]
pub(crate) struct MealArgs {
    /// Path to a JSON file containing a NutritionalTarget.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) target_path: Option<Utf8PathBuf>,
    /// Path to the JSON food catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Meal to compose (breakfast, lunch, dinner, snack).
    #[arg(long = ARG_MEAL_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) meal_type: Option<MealType>,
}

impl MealArgs {
    pub(crate) fn into_config(self) -> Result<MealConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MealConfig::try_from(merged)
    }
}

/// Resolved `meal` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MealConfig {
    /// Path to the JSON target file.
    pub(crate) target_path: Utf8PathBuf,
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Meal to compose.
    pub(crate) meal_type: MealType,
}

impl TryFrom<MealArgs> for MealConfig {
    type Error = CliError;

    fn try_from(args: MealArgs) -> Result<Self, Self::Error> {
        let target_path = args.target_path.ok_or(CliError::MissingArgument {
            field: ARG_TARGET,
            env: ENV_MEAL_TARGET,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_MEAL_CATALOG,
        })?;
        Ok(Self {
            target_path,
            catalog,
            meal_type: args.meal_type.unwrap_or_default(),
        })
    }
}

/// Composed meal as printed by the command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MealPlan {
    /// Meal that was composed.
    pub(crate) meal_type: MealType,
    /// One component per slot, in slot order.
    pub(crate) components: Vec<MealComponent>,
}

pub(crate) fn run_meal(args: MealArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_meal_with(args, &mut stdout)
}

pub(crate) fn run_meal_with(args: MealArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.target_path, ARG_TARGET)?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let target = load_target(&config.target_path)?;
    let engine = load_engine(&config.catalog)?;
    let plan = MealPlan {
        meal_type: config.meal_type,
        components: engine.compose_meal(&target, config.meal_type),
    };
    write_json(writer, &plan)
}
