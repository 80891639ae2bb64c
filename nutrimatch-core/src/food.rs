//! Catalog entries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Nutrient, Nutrients};

/// Upper bound of the nutrition density scale.
pub const MAX_DENSITY: f64 = 10.0;

/// A food available for ranking.
///
/// Names are not required to be unique. The optional density score is a
/// precomputed value in `0.0..=10.0`; engines derive one from the nutrients
/// when it is absent.
///
/// # Examples
/// ```
/// use nutrimatch_core::{FoodItem, Nutrients};
///
/// let food = FoodItem::new(
///     "Brocoli",
///     Nutrients {
///         calories: 34.0,
///         protein: 2.8,
///         fiber: 2.6,
///         ..Nutrients::default()
///     },
/// )
/// .with_density(9.5);
/// assert_eq!(food.density_score, Some(9.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodItem {
    /// Display name.
    pub name: String,
    /// Per-100g nutrient values.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub nutrients: Nutrients,
    /// Precomputed nutrition density, if the catalog supplied one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub density_score: Option<f64>,
}

impl FoodItem {
    /// Construct a food without a precomputed density.
    #[must_use]
    pub fn new(name: impl Into<String>, nutrients: Nutrients) -> Self {
        Self {
            name: name.into(),
            nutrients,
            density_score: None,
        }
    }

    /// Attach a precomputed density score.
    #[must_use]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density_score = Some(density);
        self
    }

    /// Shorthand for a single nutrient column.
    #[must_use]
    pub const fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }

    /// Report whether the name contains `needle`, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::{FoodItem, Nutrients};
    ///
    /// let food = FoodItem::new("Poulet grillé", Nutrients::default());
    /// assert!(food.name_contains("POULET"));
    /// assert!(!food.name_contains("saumon"));
    /// ```
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
