//! Nutrition density: a bounded per-calorie quality heuristic.
//!
//! Protein and fibre earn points per calorie; saturated fat and sugars cost
//! points per calorie. The doubled sum is clamped into `0.0..=10.0`.

use nutrimatch_core::{FoodItem, MAX_DENSITY, Nutrients};

const PROTEIN_POINTS: f64 = 100.0;
const FIBER_POINTS: f64 = 50.0;
const SATURATED_FAT_PENALTY: f64 = 30.0;
const SUGAR_PENALTY: f64 = 20.0;
const DENSITY_SCALE: f64 = 2.0;

/// Derive a density score from raw nutrients.
///
/// Foods without calories score `0.0`.
///
/// # Examples
/// ```
/// use nutrimatch_core::Nutrients;
/// use nutrimatch_ranker::nutrition_density;
///
/// let banana = Nutrients {
///     calories: 89.0,
///     saturated_fat: 0.1,
///     protein: 1.1,
///     fiber: 2.6,
///     sugars: 12.0,
///     ..Nutrients::default()
/// };
/// assert_eq!(nutrition_density(&banana), 0.0);
/// assert_eq!(nutrition_density(&Nutrients::default()), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "density is a weighted per-calorie ratio"
)]
#[must_use]
pub fn nutrition_density(nutrients: &Nutrients) -> f64 {
    let calories = nutrients.calories;
    if calories <= 0.0 || !calories.is_finite() {
        return 0.0;
    }
    let benefit = (nutrients.protein / calories) * PROTEIN_POINTS
        + (nutrients.fiber / calories) * FIBER_POINTS;
    let penalty = (nutrients.saturated_fat / calories) * SATURATED_FAT_PENALTY
        + (nutrients.sugars / calories) * SUGAR_PENALTY;
    let score = (benefit - penalty) * DENSITY_SCALE;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_DENSITY)
}

/// Density used for ranking and display.
///
/// A precomputed catalog value wins (clamped into range); non-finite or
/// absent values fall back to [`nutrition_density`].
#[must_use]
pub fn effective_density(food: &FoodItem) -> f64 {
    match food.density_score {
        Some(precomputed) if precomputed.is_finite() => {
            if !(0.0..=MAX_DENSITY).contains(&precomputed) {
                log::warn!(
                    "clamping out-of-range density {precomputed} for food '{}'",
                    food.name
                );
            }
            precomputed.clamp(0.0, MAX_DENSITY)
        }
        _ => nutrition_density(&food.nutrients),
    }
}

/// Densities for a whole catalog, in catalog order.
pub(crate) fn catalog_densities(catalog: &[FoodItem]) -> Vec<f64> {
    catalog.iter().map(effective_density).collect()
}
