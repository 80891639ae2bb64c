//! Property-based tests for the ranking engine.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical queries produce identical results.
//! - **Cardinality:** results never exceed the requested count or the
//!   number of admissible foods.
//! - **Ordering:** scores are non-increasing and percentages track them.
//! - **Constraints:** exclusions and nutrient bounds always hold.
//! - **Anchor exclusion:** a food is never its own alternative.
//! - **Density bounds:** densities stay within `0.0..=10.0`.


use nutrimatch_core::{AlternativesQuery, MAX_DENSITY, RecommendationQuery};
use nutrimatch_ranker::{RecommendationEngine, nutrition_density};
use proptest::prelude::*;

use proptest_support::{catalog_strategy, goal_strategy, target_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recommendations_are_deterministic(
        catalog in catalog_strategy(1, 30),
        target in target_strategy(),
        count in 0_usize..40,
    ) {
        let engine = RecommendationEngine::new(catalog).expect("valid catalog");
        let query = RecommendationQuery::new(target).with_count(count);
        prop_assert_eq!(engine.recommend(&query), engine.recommend(&query));
    }

    #[test]
    fn results_are_bounded_and_ordered(
        catalog in catalog_strategy(1, 30),
        target in target_strategy(),
        count in 0_usize..40,
    ) {
        let size = catalog.len();
        let engine = RecommendationEngine::new(catalog).expect("valid catalog");
        let ranked = engine.recommend(&RecommendationQuery::new(target).with_count(count));
        prop_assert_eq!(ranked.len(), count.min(size));
        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.similarity_score >= second.similarity_score);
            }
        }
        if let Some(best) = ranked.first() {
            if best.similarity_score > 0.0 {
                prop_assert_eq!(best.match_percentage, 100.0);
                prop_assert!(ranked.iter().all(|r| r.match_percentage <= 100.0));
            }
        }
    }

    #[test]
    fn constraints_always_hold(
        catalog in catalog_strategy(1, 30),
        target in target_strategy(),
        min_protein in 0.0_f64..300.0,
        max_calories in 0.0_f64..600.0,
        excluded in 0_usize..30,
    ) {
        let excluded_name = format!("food-{excluded}");
        let engine = RecommendationEngine::new(catalog).expect("valid catalog");
        let query = RecommendationQuery::new(target)
            .with_count(30)
            .with_min_protein(min_protein)
            .with_max_calories(max_calories)
            .excluding([excluded_name.clone()]);
        let admissible = engine.catalog().iter().filter(|food| query.admits(food)).count();
        let ranked = engine.recommend(&query);
        prop_assert_eq!(ranked.len(), admissible);
        for recommendation in &ranked {
            prop_assert_ne!(&recommendation.food.name, &excluded_name);
            prop_assert!(recommendation.food.nutrients.protein >= min_protein);
            prop_assert!(recommendation.food.nutrients.calories <= max_calories);
        }
    }

    #[test]
    fn anchors_never_recommend_themselves(
        catalog in catalog_strategy(2, 20),
        anchor in 0_usize..20,
        goal in proptest::option::of(goal_strategy()),
    ) {
        let size = catalog.len();
        let engine = RecommendationEngine::new(catalog).expect("valid catalog");
        // Names are unique, so the anchor is the only exact match; the
        // `food-1` prefix also matches `food-10..19`, which come later.
        let name = format!("food-{}", anchor.min(size - 1));
        let mut query = AlternativesQuery::new(name.clone()).with_count(size);
        query.goal = goal;
        let alternatives = engine.find_alternatives(&query);
        prop_assert_eq!(alternatives.len(), size - 1);
        prop_assert!(alternatives.iter().all(|alt| alt.food.name != name));
    }

    #[test]
    fn densities_stay_in_range(catalog in catalog_strategy(1, 30)) {
        for food in &catalog {
            let density = nutrition_density(&food.nutrients);
            prop_assert!((0.0..=MAX_DENSITY).contains(&density));
        }
        let engine = RecommendationEngine::new(catalog).expect("valid catalog");
        prop_assert!(engine.densities().all(|(_, d)| (0.0..=MAX_DENSITY).contains(&d)));
    }
}
