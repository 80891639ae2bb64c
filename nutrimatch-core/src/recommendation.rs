//! Query parameters and ranked results.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FoodItem, Goal, NutritionalTarget};

/// Number of foods returned by [`RecommendationQuery::new`].
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// Number of foods returned by [`AlternativesQuery::new`].
pub const DEFAULT_ALTERNATIVES: usize = 5;

/// One ranked food.
///
/// `similarity_score` is the goal-weighted cosine similarity.
/// `match_percentage` rescales it so the best item in the same result set
/// reads `100.0`, rounded to one decimal place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// The ranked food.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub food: FoodItem,
    /// Goal-weighted similarity to the query.
    pub similarity_score: f64,
    /// Score relative to the best item in the result set.
    pub match_percentage: f64,
}

/// Parameters for a target-driven recommendation.
///
/// # Examples
/// ```
/// use nutrimatch_core::{Goal, NutritionalTarget, RecommendationQuery};
///
/// let target = NutritionalTarget::new(500.0, 40.0, 50.0, 15.0, Goal::WeightLoss).unwrap();
/// let query = RecommendationQuery::new(target)
///     .with_count(5)
///     .excluding(["Amandes"])
///     .with_min_protein(10.0);
/// assert_eq!(query.count, 5);
/// assert!(query.exclude.contains("Amandes"));
/// assert!(query.max_calories.is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    /// Target the foods are compared against.
    pub target: NutritionalTarget,
    /// Maximum number of foods to return.
    pub count: usize,
    /// Exact names that must not appear in the result.
    pub exclude: BTreeSet<String>,
    /// Minimum protein per 100g a food must carry.
    pub min_protein: f64,
    /// Maximum calories per 100g a food may carry.
    pub max_calories: f64,
}

impl RecommendationQuery {
    /// Build a query with the default count and no constraints.
    #[must_use]
    pub const fn new(target: NutritionalTarget) -> Self {
        Self {
            target,
            count: DEFAULT_RECOMMENDATIONS,
            exclude: BTreeSet::new(),
            min_protein: 0.0,
            max_calories: f64::INFINITY,
        }
    }

    /// Set the number of foods to return.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Exclude foods by exact name.
    #[must_use]
    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Require at least `grams` of protein per 100g.
    #[must_use]
    pub const fn with_min_protein(mut self, grams: f64) -> Self {
        self.min_protein = grams;
        self
    }

    /// Allow at most `kcal` per 100g.
    #[must_use]
    pub const fn with_max_calories(mut self, kcal: f64) -> Self {
        self.max_calories = kcal;
        self
    }

    /// Report whether `food` passes the exclusion list and nutrient bounds.
    #[must_use]
    pub fn admits(&self, food: &FoodItem) -> bool {
        !self.exclude.contains(&food.name)
            && food.nutrients.protein >= self.min_protein
            && food.nutrients.calories <= self.max_calories
    }
}

/// Parameters for a nearest-neighbour lookup around an existing food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativesQuery {
    /// Case-insensitive substring identifying the anchor food.
    pub food_name: String,
    /// Maximum number of alternatives to return.
    pub count: usize,
    /// Optional goal weighting; `None` ranks by similarity alone.
    pub goal: Option<Goal>,
}

impl AlternativesQuery {
    /// Build a goal-agnostic query with the default count.
    #[must_use]
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            count: DEFAULT_ALTERNATIVES,
            goal: None,
        }
    }

    /// Set the number of alternatives to return.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Weight the alternatives for `goal`.
    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }
}
