//! Meal composition: one recommendation list per meal slot.

use nutrimatch_core::{MealComponent, MealType, NutritionalTarget, RecommendationQuery};

use crate::RecommendationEngine;

/// Foods proposed for each slot of a composed meal.
pub const FOODS_PER_SLOT: usize = 5;

impl RecommendationEngine {
    /// Split `target` across the slots of `meal` and rank the catalog for
    /// each slot.
    ///
    /// Components follow the slot order of [`MealType::portions`]. Each slot
    /// is ranked independently, so one food may appear in several slots.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::{Goal, MealSlot, MealType, NutritionalTarget};
    /// use nutrimatch_core::test_support::sample_catalog;
    /// use nutrimatch_ranker::RecommendationEngine;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let engine = RecommendationEngine::new(sample_catalog())?;
    /// let target = NutritionalTarget::new(700.0, 40.0, 80.0, 20.0, Goal::Maintenance)?;
    /// let meal = engine.compose_meal(&target, MealType::Snack);
    /// let slots: Vec<MealSlot> = meal.iter().map(|c| c.slot).collect();
    /// assert_eq!(slots, vec![MealSlot::Main, MealSlot::Fruit]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn compose_meal(&self, target: &NutritionalTarget, meal: MealType) -> Vec<MealComponent> {
        log::debug!("composing {meal} for a {} target", target.goal);
        meal.portions()
            .iter()
            .map(|portion| {
                let query =
                    RecommendationQuery::new(portion.target_for(target)).with_count(FOODS_PER_SLOT);
                MealComponent {
                    slot: portion.slot,
                    foods: self.recommend(&query),
                }
            })
            .collect()
    }
}
