//! Error types raised while building a ranking engine.
#![forbid(unsafe_code)]

use nutrimatch_core::Nutrient;
use thiserror::Error;

/// Invalid input rejected while fitting the feature space.
///
/// Queries never fail; only engine construction does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankerError {
    /// The catalog or feature matrix contained no rows.
    #[error("cannot fit a feature space over an empty catalog")]
    EmptyCatalog,
    /// A food carried a negative or infinite nutrient value.
    #[error("food '{food}' has invalid {nutrient} value {value}")]
    InvalidNutrient {
        /// Name of the offending food.
        food: String,
        /// Column holding the bad value.
        nutrient: Nutrient,
        /// Value found in the catalog.
        value: f64,
    },
}
