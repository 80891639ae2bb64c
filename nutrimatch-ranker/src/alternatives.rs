//! Nearest-neighbour lookup around an existing food.

use nutrimatch_core::{AlternativesQuery, Recommendation};

use crate::RecommendationEngine;

impl RecommendationEngine {
    /// Index of the first food whose name contains `needle`, ignoring case.
    #[must_use]
    pub fn find_anchor(&self, needle: &str) -> Option<usize> {
        self.catalog()
            .iter()
            .position(|food| food.name_contains(needle))
    }

    /// Rank the foods most similar to the first catalog match for
    /// `query.food_name`.
    ///
    /// The anchor itself never appears in its own alternatives. An unknown
    /// name yields an empty list.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_core::{AlternativesQuery, FoodItem, Nutrients};
    /// use nutrimatch_ranker::RecommendationEngine;
    ///
    /// # fn main() -> Result<(), nutrimatch_ranker::RankerError> {
    /// let catalog = ["Pomme", "Poire", "Pain"]
    ///     .into_iter()
    ///     .zip([52.0, 57.0, 265.0])
    ///     .map(|(name, calories)| FoodItem::new(name, Nutrients { calories, ..Nutrients::default() }))
    ///     .collect();
    /// let engine = RecommendationEngine::new(catalog)?;
    /// let alternatives = engine.find_alternatives(&AlternativesQuery::new("pomme"));
    /// assert!(alternatives.iter().all(|alt| alt.food.name != "Pomme"));
    /// assert!(engine.find_alternatives(&AlternativesQuery::new("kiwi")).is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn find_alternatives(&self, query: &AlternativesQuery) -> Vec<Recommendation> {
        let Some(anchor) = self.find_anchor(&query.food_name) else {
            log::debug!("no catalog food matches '{}'", query.food_name);
            return Vec::new();
        };
        let Some(probe) = self.space().rows().get(anchor).copied() else {
            return Vec::new();
        };
        let candidates: Vec<(usize, f64)> = self
            .weighted_similarities(&probe, query.goal)
            .into_iter()
            .enumerate()
            .filter(|&(index, _)| index != anchor)
            .collect();
        self.top_results(candidates, query.count)
    }
}
