//! Command-line interface for the nutrimatch recommendation engine.
//!
//! Every subcommand loads a JSON food catalog, fits a
//! [`RecommendationEngine`](nutrimatch_ranker::RecommendationEngine) over it,
//! and prints its answer as pretty JSON on stdout. Options are layered with
//! `ortho_config`: command-line flags override `NUTRIMATCH_CMDS_*`
//! environment variables, which override configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod alternatives;
mod density;
mod error;
mod fs;
mod input;
mod meal;
mod output;
mod recommend;

pub use error::CliError;

use alternatives::{AlternativesArgs, run_alternatives};
use density::{DensityArgs, run_density};
use meal::{MealArgs, run_meal};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_TARGET: &str = "target";
pub(crate) const ARG_FOOD_NAME: &str = "food-name";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_EXCLUDE: &str = "exclude";
pub(crate) const ARG_MIN_PROTEIN: &str = "min-protein";
pub(crate) const ARG_MAX_CALORIES: &str = "max-calories";
pub(crate) const ARG_GOAL: &str = "goal";
pub(crate) const ARG_MEAL_TYPE: &str = "meal-type";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "NUTRIMATCH_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_RECOMMEND_TARGET: &str = "NUTRIMATCH_CMDS_RECOMMEND_TARGET_PATH";
pub(crate) const ENV_ALTERNATIVES_CATALOG: &str = "NUTRIMATCH_CMDS_ALTERNATIVES_CATALOG";
pub(crate) const ENV_ALTERNATIVES_FOOD_NAME: &str = "NUTRIMATCH_CMDS_ALTERNATIVES_FOOD_NAME";
pub(crate) const ENV_DENSITY_CATALOG: &str = "NUTRIMATCH_CMDS_DENSITY_CATALOG";
pub(crate) const ENV_MEAL_CATALOG: &str = "NUTRIMATCH_CMDS_MEAL_CATALOG";
pub(crate) const ENV_MEAL_TARGET: &str = "NUTRIMATCH_CMDS_MEAL_TARGET_PATH";

/// Run the nutrimatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments fail to parse, configuration cannot
/// be resolved, inputs cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Alternatives(args) => run_alternatives(args),
        Command::Density(args) => run_density(args),
        Command::Meal(args) => run_meal(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nutrimatch",
    about = "Rank foods against nutritional targets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend foods for a nutritional target.
    Recommend(RecommendArgs),
    /// Find foods similar to an existing catalog entry.
    Alternatives(AlternativesArgs),
    /// Report the nutrition density of every catalog food.
    Density(DensityArgs),
    /// Compose a meal slot by slot for a nutritional target.
    Meal(MealArgs),
}

#[cfg(test)]
mod tests;
