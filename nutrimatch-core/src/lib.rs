//! Core domain types for the nutrimatch engine.
//!
//! These models describe foods, the nutritional targets they are ranked
//! against, and the ranked results. Constructors that can reject input return
//! `Result` to surface invalid values early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod food;
pub mod goal;
pub mod meal;
pub mod nutrients;
pub mod recommendation;
pub mod recommender;
pub mod target;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use food::{FoodItem, MAX_DENSITY};
pub use goal::{Goal, GoalParseError};
pub use meal::{MealComponent, MealSlot, MealType, Portion};
pub use nutrients::{NUTRIENT_COUNT, Nutrient, Nutrients};
pub use recommendation::{
    AlternativesQuery, DEFAULT_ALTERNATIVES, DEFAULT_RECOMMENDATIONS, Recommendation,
    RecommendationQuery,
};
pub use recommender::Recommender;
pub use target::{NutritionalTarget, NutritionalTargetError};
