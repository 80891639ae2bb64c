//! Rank foods for a nutritional target.
//!
//! The `Recommender` trait is the seam between callers (meal planners,
//! assistants, the CLI) and ranking engines.

use crate::{AlternativesQuery, Recommendation, RecommendationQuery};

/// Produce ranked food lists.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single engine
/// can serve concurrent queries. Both methods are infallible: an unknown food
/// or an over-constrained query yields an empty list.
///
/// Implementations must:
/// - Return at most `query.count` items, best first.
/// - Produce the same output for the same inputs.
///
/// # Examples
///
/// ```rust
/// use nutrimatch_core::{
///     AlternativesQuery, Goal, NutritionalTarget, Recommendation, RecommendationQuery,
///     Recommender,
/// };
///
/// struct EmptyRecommender;
///
/// impl Recommender for EmptyRecommender {
///     fn recommend(&self, _query: &RecommendationQuery) -> Vec<Recommendation> {
///         Vec::new()
///     }
///
///     fn find_alternatives(&self, _query: &AlternativesQuery) -> Vec<Recommendation> {
///         Vec::new()
///     }
/// }
///
/// let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::Maintenance).unwrap();
/// let recommender = EmptyRecommender;
/// assert!(recommender.recommend(&RecommendationQuery::new(target)).is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Rank the catalog against `query.target`, honouring its constraints.
    fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation>;

    /// Rank the foods most similar to the food named by `query`.
    fn find_alternatives(&self, query: &AlternativesQuery) -> Vec<Recommendation>;
}
