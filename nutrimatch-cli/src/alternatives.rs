//! Alternatives command implementation for the nutrimatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nutrimatch_core::{AlternativesQuery, DEFAULT_ALTERNATIVES, Goal};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::input::load_engine;
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_COUNT, ARG_FOOD_NAME, ARG_GOAL, CliError, ENV_ALTERNATIVES_CATALOG,
    ENV_ALTERNATIVES_FOOD_NAME,
};

/// CLI arguments for the `alternatives` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the catalog foods closest to an existing one. The \
                 first food whose name contains the given text, ignoring \
                 case, anchors the search and is never listed itself.",
    about = "Find alternatives to a catalog food"
)]
#[ortho_config(prefix = "NUTRIMATCH")]
pub(crate) struct AlternativesArgs {
    /// Case-insensitive text identifying the anchor food.
    #[arg(value_name = "name")]
    #[serde(default)]
    pub(crate) food_name: Option<String>,
    /// Path to the JSON food catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of alternatives to print.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Weight alternatives for a goal (weight-loss, maintenance, weight-gain).
    #[arg(long = ARG_GOAL, value_name = "goal")]
    #[serde(default)]
    pub(crate) goal: Option<Goal>,
}

impl AlternativesArgs {
    pub(crate) fn into_config(self) -> Result<AlternativesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AlternativesConfig::try_from(merged)
    }
}

/// Resolved `alternatives` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlternativesConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Query derived from the arguments.
    pub(crate) query: AlternativesQuery,
}

impl TryFrom<AlternativesArgs> for AlternativesConfig {
    type Error = CliError;

    fn try_from(args: AlternativesArgs) -> Result<Self, Self::Error> {
        let food_name = args.food_name.ok_or(CliError::MissingArgument {
            field: ARG_FOOD_NAME,
            env: ENV_ALTERNATIVES_FOOD_NAME,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_ALTERNATIVES_CATALOG,
        })?;
        let mut query =
            AlternativesQuery::new(food_name).with_count(args.count.unwrap_or(DEFAULT_ALTERNATIVES));
        query.goal = args.goal;
        Ok(Self { catalog, query })
    }
}

pub(crate) fn run_alternatives(args: AlternativesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_alternatives_with(args, &mut stdout)
}

pub(crate) fn run_alternatives_with(
    args: AlternativesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let engine = load_engine(&config.catalog)?;
    let alternatives = engine.find_alternatives(&config.query);
    if alternatives.is_empty() {
        log::info!("no alternatives found for '{}'", config.query.food_name);
    }
    write_json(writer, &alternatives)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AlternativesConfig, CliError> {
    let merged = AlternativesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AlternativesConfig::try_from(merged)
}
