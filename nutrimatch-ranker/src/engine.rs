//! The ranking engine: one fitted feature space per catalog version.
//!
//! [`RecommendationEngine::new`] fills missing (NaN) nutrients with zero,
//! validates the catalog, fits the
//! [`FeatureSpace`], fills in missing densities, and records the column
//! maxima used for goal weighting. Every query after that is a read-only
//! computation over this snapshot, so one engine can serve many threads.

use nutrimatch_core::{
    AlternativesQuery, FoodItem, Goal, Recommendation, RecommendationQuery, Recommender,
};

use crate::density::catalog_densities;
use crate::{FeatureNormalizer, FeatureSpace, FeatureVector, GoalWeights, RankerError};

/// Content-based recommender over an immutable food catalog.
///
/// # Examples
/// ```
/// use nutrimatch_core::{FoodItem, Goal, Nutrients, NutritionalTarget, RecommendationQuery};
/// use nutrimatch_ranker::RecommendationEngine;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = vec![
///     FoodItem::new("Lentilles", Nutrients { calories: 116.0, protein: 9.0, fiber: 8.0, ..Nutrients::default() }),
///     FoodItem::new("Beurre", Nutrients { calories: 717.0, fat: 81.0, saturated_fat: 51.0, ..Nutrients::default() }),
/// ];
/// let engine = RecommendationEngine::new(catalog)?;
/// let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss)?;
/// let ranked = engine.recommend(&RecommendationQuery::new(target).with_count(1));
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].match_percentage, 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Vec<FoodItem>,
    space: FeatureSpace,
    densities: Vec<f64>,
    weights: GoalWeights,
}

impl RecommendationEngine {
    /// Fit an engine over `catalog`.
    ///
    /// # Errors
    /// Returns [`RankerError::EmptyCatalog`] for an empty catalog and
    /// [`RankerError::InvalidNutrient`] when a food carries a negative or
    /// infinite nutrient value. NaN nutrients count as `0.0`.
    pub fn new(catalog: Vec<FoodItem>) -> Result<Self, RankerError> {
        let catalog: Vec<FoodItem> = catalog
            .into_iter()
            .map(|food| FoodItem {
                nutrients: food.nutrients.with_missing_as_zero(),
                ..food
            })
            .collect();
        validate_catalog(&catalog)?;
        let matrix: Vec<FeatureVector> = catalog
            .iter()
            .map(|food| food.nutrients.to_array())
            .collect();
        let space = FeatureNormalizer::fit(&matrix)?;
        let densities = catalog_densities(&catalog);
        let weights = GoalWeights::from_catalog(&catalog);
        log::debug!("fitted feature space over {} foods", catalog.len());
        Ok(Self {
            catalog,
            space,
            densities,
            weights,
        })
    }

    /// Foods in catalog order.
    #[must_use]
    pub fn catalog(&self) -> &[FoodItem] {
        &self.catalog
    }

    /// Number of foods in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always `false`: engines cannot be built over an empty catalog.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Pair each food with the density used for ranking.
    ///
    /// Precomputed catalog densities are reported as given (clamped into
    /// range); the rest are derived from nutrients.
    pub fn densities(&self) -> impl Iterator<Item = (&FoodItem, f64)> + '_ {
        self.catalog.iter().zip(self.densities.iter().copied())
    }

    pub(crate) const fn space(&self) -> &FeatureSpace {
        &self.space
    }

    /// Cosine similarity of `probe` against every catalog row, optionally
    /// goal-weighted, in catalog order.
    pub(crate) fn weighted_similarities(
        &self,
        probe: &FeatureVector,
        goal: Option<Goal>,
    ) -> Vec<f64> {
        self.space
            .rows()
            .iter()
            .zip(&self.catalog)
            .zip(&self.densities)
            .map(|((row, food), &density)| {
                let similarity = crate::cosine_similarity(probe, row);
                goal.map_or(similarity, |active| {
                    self.weights.apply(active, similarity, food, density)
                })
            })
            .collect()
    }

    /// Sort `(index, score)` pairs best first, keep `count`, and attach
    /// match percentages relative to the best kept score.
    pub(crate) fn top_results(
        &self,
        mut scored: Vec<(usize, f64)>,
        count: usize,
    ) -> Vec<Recommendation> {
        // `sort_by` is stable: ties keep catalog order.
        scored.sort_by(|left, right| right.1.total_cmp(&left.1));
        scored.truncate(count);
        let best = scored.first().map_or(0.0, |&(_, score)| score);
        scored
            .into_iter()
            .filter_map(|(index, score)| {
                self.catalog.get(index).map(|food| Recommendation {
                    food: food.clone(),
                    similarity_score: score,
                    match_percentage: match_percentage(score, best),
                })
            })
            .collect()
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation> {
        Self::recommend(self, query)
    }

    fn find_alternatives(&self, query: &AlternativesQuery) -> Vec<Recommendation> {
        Self::find_alternatives(self, query)
    }
}

fn validate_catalog(catalog: &[FoodItem]) -> Result<(), RankerError> {
    if catalog.is_empty() {
        return Err(RankerError::EmptyCatalog);
    }
    match catalog
        .iter()
        .find_map(|food| food.nutrients.first_invalid().map(|bad| (food, bad)))
    {
        Some((food, (nutrient, value))) => Err(RankerError::InvalidNutrient {
            food: food.name.clone(),
            nutrient,
            value,
        }),
        None => Ok(()),
    }
}

/// `score` as a percentage of `best`, rounded to one decimal place.
///
/// A zero or non-finite best score maps every item to `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "percentages rescale scores against the best match"
)]
pub(crate) fn match_percentage(score: f64, best: f64) -> f64 {
    if best == 0.0 || !best.is_finite() {
        return 0.0;
    }
    (score / best * 1000.0).round() / 10.0
}
