//! Density command implementation for the nutrimatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::input::load_engine;
use crate::output::write_json;
use crate::{ARG_CATALOG, CliError, ENV_DENSITY_CATALOG};

/// CLI arguments for the `density` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print every catalog food with the nutrition density used \
                 for ranking. Precomputed densities are reported as given; \
                 the rest are derived from the nutrients.",
    about = "Report nutrition density scores"
)]
#[ortho_config(prefix = "NUTRIMATCH")]
pub(crate) struct DensityArgs {
    /// Path to the JSON food catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// One line of density output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DensityEntry {
    /// Food name.
    pub(crate) name: String,
    /// Density in `0.0..=10.0`.
    pub(crate) density_score: f64,
}

pub(crate) fn run_density(args: DensityArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_density_with(args, &mut stdout)
}

pub(crate) fn run_density_with(args: DensityArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let catalog = merged.catalog.ok_or(CliError::MissingArgument {
        field: ARG_CATALOG,
        env: ENV_DENSITY_CATALOG,
    })?;
    require_existing(&catalog, ARG_CATALOG)?;
    let engine = load_engine(&catalog)?;
    let entries: Vec<DensityEntry> = engine
        .densities()
        .map(|(food, density_score)| DensityEntry {
            name: food.name.clone(),
            density_score,
        })
        .collect();
    write_json(writer, &entries)
}
