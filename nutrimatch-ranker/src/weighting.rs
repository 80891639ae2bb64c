//! Goal-specific multipliers applied to raw similarity.
//!
//! Ratios compare a food's calories, protein, and fibre against the catalog
//! maximum for that column. The maximum is padded by [`RATIO_EPSILON`] so a
//! column of zeros yields ratios of zero rather than a division by zero.

use nutrimatch_core::{FoodItem, Goal, MAX_DENSITY, Nutrient};

/// Padding added to every column maximum before dividing.
pub const RATIO_EPSILON: f64 = 1e-6;

const GAIN_PROTEIN_WEIGHT: f64 = 0.5;
const GAIN_CALORIE_WEIGHT: f64 = 0.3;
const LOSS_LIGHTNESS_WEIGHT: f64 = 0.4;
const LOSS_FIBER_WEIGHT: f64 = 0.3;
const LOSS_PROTEIN_WEIGHT: f64 = 0.2;
const MAINTENANCE_DENSITY_WEIGHT: f64 = 0.3;

/// Catalog-wide column maxima used to build goal ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalWeights {
    max_calories: f64,
    max_protein: f64,
    max_fiber: f64,
}

impl GoalWeights {
    /// Record the column maxima of `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &[FoodItem]) -> Self {
        let column_max = |nutrient: Nutrient| {
            catalog
                .iter()
                .map(|food| food.nutrient(nutrient))
                .fold(0.0_f64, f64::max)
        };
        Self {
            max_calories: column_max(Nutrient::Calories),
            max_protein: column_max(Nutrient::Protein),
            max_fiber: column_max(Nutrient::Fiber),
        }
    }

    /// Multiplier for `food` under `goal`.
    ///
    /// `density` is the food's nutrition density in `0.0..=10.0`, used only
    /// for [`Goal::Maintenance`].
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::{FoodItem, Goal, Nutrients};
    /// use nutrimatch_ranker::GoalWeights;
    ///
    /// let food = FoodItem::new("Eau", Nutrients::default());
    /// let weights = GoalWeights::from_catalog(std::slice::from_ref(&food));
    /// assert_eq!(weights.multiplier(Goal::Maintenance, &food, 10.0), 1.3);
    /// assert_eq!(weights.multiplier(Goal::WeightGain, &food, 0.0), 1.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "goal multipliers are weighted sums of ratios"
    )]
    #[must_use]
    pub fn multiplier(&self, goal: Goal, food: &FoodItem, density: f64) -> f64 {
        let calorie_ratio = ratio(food.nutrients.calories, self.max_calories);
        let protein_ratio = ratio(food.nutrients.protein, self.max_protein);
        match goal {
            Goal::WeightGain => {
                1.0 + GAIN_PROTEIN_WEIGHT * protein_ratio + GAIN_CALORIE_WEIGHT * calorie_ratio
            }
            Goal::WeightLoss => {
                let fiber_ratio = ratio(food.nutrients.fiber, self.max_fiber);
                1.0 + LOSS_LIGHTNESS_WEIGHT * (1.0 - calorie_ratio)
                    + LOSS_FIBER_WEIGHT * fiber_ratio
                    + LOSS_PROTEIN_WEIGHT * protein_ratio
            }
            Goal::Maintenance => 1.0 + MAINTENANCE_DENSITY_WEIGHT * (density / MAX_DENSITY),
        }
    }

    /// Weight a raw similarity for `goal`.
    #[expect(clippy::float_arithmetic, reason = "weighting multiplies scores")]
    #[must_use]
    pub fn apply(&self, goal: Goal, similarity: f64, food: &FoodItem, density: f64) -> f64 {
        similarity * self.multiplier(goal, food, density)
    }
}

#[expect(clippy::float_arithmetic, reason = "ratio against a padded maximum")]
fn ratio(value: f64, max: f64) -> f64 {
    value / (max + RATIO_EPSILON)
}
