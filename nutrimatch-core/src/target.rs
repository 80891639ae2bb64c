//! Nutritional targets supplied by the caller for each query.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Goal;

/// Absolute daily (or per-meal) intake the user is aiming for.
///
/// Targets are produced upstream by a macro calculator and consumed by a
/// single query; engines never store them.
///
/// # Examples
/// ```
/// use nutrimatch_core::{Goal, NutritionalTarget};
///
/// # fn main() -> Result<(), nutrimatch_core::NutritionalTargetError> {
/// let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss)?;
/// assert_eq!(target.goal, Goal::WeightLoss);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutritionalTarget {
    /// Energy in kilocalories.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrates in grams.
    pub carbs: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Goal used to weight the similarity scores.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Goal,
}

/// Errors returned by [`NutritionalTarget::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NutritionalTargetError {
    /// A field was negative, NaN, or infinite.
    #[error("target {field} must be a finite, non-negative number")]
    InvalidAmount {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl NutritionalTarget {
    /// Validate and construct a target.
    ///
    /// # Errors
    /// Returns [`NutritionalTargetError::InvalidAmount`] when any amount is
    /// negative or not finite.
    pub fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        goal: Goal,
    ) -> Result<Self, NutritionalTargetError> {
        let target = Self {
            calories,
            protein,
            carbs,
            fat,
            goal,
        };
        target.validate()?;
        Ok(target)
    }

    /// Check every amount is finite and non-negative.
    ///
    /// Deserialized targets bypass [`NutritionalTarget::new`], so callers
    /// reading them from files should validate explicitly.
    ///
    /// # Errors
    /// Returns [`NutritionalTargetError::InvalidAmount`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), NutritionalTargetError> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ];
        match fields
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
        {
            Some((field, _)) => Err(NutritionalTargetError::InvalidAmount { field }),
            None => Ok(()),
        }
    }
}
