//! Loading catalogs and targets from JSON files.

use std::io::BufReader;

use camino::Utf8Path;
use nutrimatch_core::{FoodItem, NutritionalTarget};
use nutrimatch_ranker::RecommendationEngine;

use crate::CliError;
use crate::fs::open_utf8_file;

/// Decode a JSON array of foods.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<FoodItem>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Vec<FoodItem> = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        },
    )?;
    log::debug!("loaded {} foods from {path}", catalog.len());
    Ok(catalog)
}

/// Load the catalog at `path` and fit an engine over it.
pub(crate) fn load_engine(path: &Utf8Path) -> Result<RecommendationEngine, CliError> {
    let catalog = load_catalog(path)?;
    RecommendationEngine::new(catalog).map_err(|source| CliError::BuildEngine {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode and validate a JSON nutritional target.
pub(crate) fn load_target(path: &Utf8Path) -> Result<NutritionalTarget, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let target: NutritionalTarget = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseTarget {
            path: path.to_path_buf(),
            source,
        },
    )?;
    target
        .validate()
        .map_err(|source| CliError::InvalidTarget {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(target)
}
