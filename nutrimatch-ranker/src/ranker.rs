//! Target-driven recommendations.
//!
//! A [`NutritionalTarget`] holds absolute amounts while the catalog is per
//! 100g, so the synthetic profile divides every amount by 100 before
//! normalising it into the engine's feature space.

use nutrimatch_core::{NutritionalTarget, Recommendation, RecommendationQuery};

use crate::{FeatureVector, RecommendationEngine};

/// Divisor bringing absolute targets onto the catalog's per-100g scale.
pub const PER_100G: f64 = 100.0;
/// Share of fat assumed to be saturated.
pub const SATURATED_FAT_SHARE: f64 = 0.30;
/// Share of carbohydrates assumed to be sugars.
pub const SUGAR_SHARE: f64 = 0.15;
/// Reference daily fibre target in grams.
pub const FIBER_REFERENCE: f64 = 25.0;
/// Reference daily sodium ceiling in milligrams.
pub const SODIUM_REFERENCE: f64 = 2000.0;

/// Build the raw per-100g profile compared against the catalog.
///
/// # Examples
/// ```
/// use nutrimatch_core::{Goal, NutritionalTarget};
/// use nutrimatch_ranker::target_profile;
///
/// let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss).unwrap();
/// let profile = target_profile(&target);
/// assert_eq!(profile[0], 5.0);
/// assert_eq!(profile[7], 20.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the profile derives secondary nutrients from fixed shares"
)]
#[must_use]
pub fn target_profile(target: &NutritionalTarget) -> FeatureVector {
    [
        target.calories,
        target.fat,
        target.fat * SATURATED_FAT_SHARE,
        target.carbs,
        target.carbs * SUGAR_SHARE,
        target.protein,
        FIBER_REFERENCE,
        SODIUM_REFERENCE,
    ]
    .map(|amount| amount / PER_100G)
}

impl RecommendationEngine {
    /// Rank the catalog against `query.target`.
    ///
    /// Scores are goal-weighted cosine similarities. Excluded names and foods
    /// outside the protein and calorie bounds are dropped before the top
    /// `query.count` are taken; an over-constrained query returns an empty
    /// list.
    #[must_use]
    pub fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation> {
        let target = &query.target;
        let probe = self.space().transform(&target_profile(target));
        let scores = self.weighted_similarities(&probe, Some(target.goal));
        let candidates: Vec<(usize, f64)> = self
            .catalog()
            .iter()
            .zip(scores)
            .enumerate()
            .filter(|(_, (food, _))| query.admits(food))
            .map(|(index, (_, score))| (index, score))
            .collect();
        log::debug!(
            "{} of {} foods qualify for a {} recommendation",
            candidates.len(),
            self.len(),
            target.goal
        );
        self.top_results(candidates, query.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrimatch_core::Goal;
    use nutrimatch_core::test_support::sample_catalog;
    use rstest::{fixture, rstest};

    #[fixture]
    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(sample_catalog()).expect("engine")
    }

    fn weight_loss() -> NutritionalTarget {
        NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss).expect("target")
    }

    fn names(results: &[Recommendation]) -> Vec<&str> {
        results.iter().map(|r| r.food.name.as_str()).collect()
    }

    #[rstest]
    fn profile_scales_targets_per_100g() {
        let profile = target_profile(&weight_loss());
        assert_eq!(profile, [5.0, 0.15, 0.045, 0.5, 0.075, 0.4, 0.25, 20.0]);
    }

    #[rstest]
    fn weight_loss_ranking_matches_reference(engine: RecommendationEngine) {
        let ranked = engine.recommend(&RecommendationQuery::new(weight_loss()).with_count(5));
        assert_eq!(
            names(&ranked),
            vec!["Brocoli", "Yaourt grec", "Banane", "Avocat", "Poulet grillé"]
        );
        let percentages: Vec<f64> = ranked.iter().map(|r| r.match_percentage).collect();
        assert_eq!(percentages, vec![100.0, 83.0, 32.3, 30.5, -1.6]);
    }

    #[rstest]
    fn weight_gain_ranking_matches_reference(engine: RecommendationEngine) {
        let target =
            NutritionalTarget::new(800.0, 50.0, 90.0, 25.0, Goal::WeightGain).expect("target");
        let ranked = engine.recommend(&RecommendationQuery::new(target).with_count(3));
        assert_eq!(names(&ranked), vec!["Brocoli", "Yaourt grec", "Banane"]);
        let percentages: Vec<f64> = ranked.iter().map(|r| r.match_percentage).collect();
        assert_eq!(percentages, vec![100.0, 95.6, 33.8]);
    }

    #[rstest]
    fn maintenance_ranking_uses_density(engine: RecommendationEngine) {
        let target =
            NutritionalTarget::new(600.0, 35.0, 70.0, 20.0, Goal::Maintenance).expect("target");
        let ranked = engine.recommend(&RecommendationQuery::new(target).with_count(4));
        assert_eq!(
            names(&ranked),
            vec!["Brocoli", "Yaourt grec", "Avocat", "Banane"]
        );
    }

    #[rstest]
    fn constraints_filter_before_truncation(engine: RecommendationEngine) {
        let query = RecommendationQuery::new(weight_loss())
            .with_count(10)
            .with_max_calories(200.0)
            .excluding(["Brocoli", "Saumon"]);
        let ranked = engine.recommend(&query);
        assert_eq!(
            names(&ranked),
            vec!["Yaourt grec", "Banane", "Avocat", "Poulet grillé", "Œufs"]
        );
        assert_eq!(ranked.first().map(|r| r.match_percentage), Some(100.0));
    }

    #[rstest]
    fn over_constrained_query_is_empty(engine: RecommendationEngine) {
        let query = RecommendationQuery::new(weight_loss()).with_min_protein(100.0);
        assert!(engine.recommend(&query).is_empty());
    }

    #[rstest]
    fn zero_count_is_empty(engine: RecommendationEngine) {
        let query = RecommendationQuery::new(weight_loss()).with_count(0);
        assert!(engine.recommend(&query).is_empty());
    }
}
