//! Recommend command implementation for the nutrimatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nutrimatch_core::{DEFAULT_RECOMMENDATIONS, RecommendationQuery};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::input::{load_engine, load_target};
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_COUNT, ARG_EXCLUDE, ARG_MAX_CALORIES, ARG_MIN_PROTEIN, ARG_TARGET, CliError,
    ENV_RECOMMEND_CATALOG, ENV_RECOMMEND_TARGET,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the catalog against a nutritional target. The target \
                 is a JSON object with calories, protein, carbs, fat, and an \
                 optional goal; the catalog is a JSON array of foods with \
                 per-100g nutrient values.",
    about = "Recommend foods for a nutritional target"
)]
#[ortho_config(prefix = "NUTRIMATCH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a NutritionalTarget.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) target_path: Option<Utf8PathBuf>,
    /// Path to the JSON food catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of foods to print.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Exact food name to leave out; repeat for several.
    #[arg(long = ARG_EXCLUDE, value_name = "name")]
    #[serde(default)]
    pub(crate) exclude: Vec<String>,
    /// Minimum protein per 100g.
    #[arg(long = ARG_MIN_PROTEIN, value_name = "grams")]
    #[serde(default)]
    pub(crate) min_protein: Option<f64>,
    /// Maximum calories per 100g.
    #[arg(long = ARG_MAX_CALORIES, value_name = "kcal")]
    #[serde(default)]
    pub(crate) max_calories: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON target file.
    pub(crate) target_path: Utf8PathBuf,
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Maximum number of foods to print.
    pub(crate) count: usize,
    /// Exact names to leave out.
    pub(crate) exclude: Vec<String>,
    /// Minimum protein per 100g.
    pub(crate) min_protein: f64,
    /// Maximum calories per 100g.
    pub(crate) max_calories: f64,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.target_path, ARG_TARGET)?;
        require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let target_path = args.target_path.ok_or(CliError::MissingArgument {
            field: ARG_TARGET,
            env: ENV_RECOMMEND_TARGET,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            target_path,
            catalog,
            count: args.count.unwrap_or(DEFAULT_RECOMMENDATIONS),
            exclude: args.exclude,
            min_protein: args.min_protein.unwrap_or(0.0),
            max_calories: args.max_calories.unwrap_or(f64::INFINITY),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let target = load_target(&config.target_path)?;
    let engine = load_engine(&config.catalog)?;
    let query = RecommendationQuery::new(target)
        .with_count(config.count)
        .excluding(config.exclude.iter().cloned())
        .with_min_protein(config.min_protein)
        .with_max_calories(config.max_calories);
    let ranked = engine.recommend(&query);
    write_json(writer, &ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
