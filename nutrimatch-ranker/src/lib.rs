//! Content-based food ranking for nutrimatch.
//!
//! The crate fits a z-score [`FeatureSpace`] over a food catalog once and
//! then answers three kinds of query against it:
//! - **Recommendations** compare a synthetic per-100g profile derived from a
//!   [`NutritionalTarget`](nutrimatch_core::NutritionalTarget) with every
//!   food by cosine similarity, weight the scores for the target's goal, and
//!   filter by the caller's exclusions and nutrient bounds.
//! - **Alternatives** rank the foods closest to an existing catalog entry.
//! - **Meals** split a target across the slots of a meal type and rank each
//!   slot separately.
//!
//! [`RecommendationEngine`] is immutable once fitted. [`EngineHandle`] swaps
//! whole engines atomically when the catalog changes.
//!
//! # Examples
//!
//! ```
//! use nutrimatch_core::test_support::staple_catalog;
//! use nutrimatch_core::{Goal, NutritionalTarget, RecommendationQuery};
//! use nutrimatch_ranker::RecommendationEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RecommendationEngine::new(staple_catalog())?;
//! let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss)?;
//! let ranked = engine.recommend(&RecommendationQuery::new(target));
//! let names: Vec<&str> = ranked.iter().map(|r| r.food.name.as_str()).collect();
//! assert_eq!(names, vec!["Broccoli", "Chicken", "Rice"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alternatives;
mod density;
mod engine;
mod error;
mod handle;
mod meal;
mod normalizer;
mod ranker;
mod similarity;
mod weighting;

pub use density::{effective_density, nutrition_density};
pub use engine::RecommendationEngine;
pub use error::RankerError;
pub use handle::EngineHandle;
pub use meal::FOODS_PER_SLOT;
pub use normalizer::{
    FeatureNormalizer, FeatureSpace, FeatureVector, VARIANCE_EPSILON, ZERO_VARIANCE_SCALE,
};
pub use ranker::{
    FIBER_REFERENCE, PER_100G, SATURATED_FAT_SHARE, SODIUM_REFERENCE, SUGAR_SHARE,
    target_profile,
};
pub use similarity::cosine_similarity;
pub use weighting::{GoalWeights, RATIO_EPSILON};
