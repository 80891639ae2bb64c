//! Facade crate for the nutrimatch food recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the `ranker`
//! feature, the content-based ranking engine.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use nutrimatch_core::{
    AlternativesQuery, FoodItem, Goal, GoalParseError, MealComponent, MealSlot, MealType,
    Nutrient, Nutrients, NutritionalTarget, NutritionalTargetError, Recommendation,
    RecommendationQuery, Recommender,
};

#[cfg(feature = "ranker")]
#[cfg_attr(docsrs, doc(cfg(feature = "ranker")))]
pub use nutrimatch_ranker::{EngineHandle, RankerError, RecommendationEngine};
