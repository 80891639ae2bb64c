//! Shared, swappable access to the current engine.
//!
//! Queries take a cheap [`Arc`] snapshot of the engine under a read lock and
//! rank outside it. [`EngineHandle::reload`] fits a new engine before taking
//! the write lock, so readers never observe a half-built catalog and a failed
//! reload leaves the previous engine in service.

use std::sync::{Arc, PoisonError, RwLock};

use nutrimatch_core::{
    AlternativesQuery, FoodItem, Recommendation, RecommendationQuery, Recommender,
};

use crate::{RankerError, RecommendationEngine};

/// Cloneable handle to the engine currently serving queries.
///
/// # Examples
/// ```
/// use nutrimatch_core::test_support::{sample_catalog, staple_catalog};
/// use nutrimatch_ranker::EngineHandle;
///
/// # fn main() -> Result<(), nutrimatch_ranker::RankerError> {
/// let handle = EngineHandle::from_catalog(sample_catalog())?;
/// let reader = handle.clone();
/// handle.reload(staple_catalog())?;
/// assert_eq!(reader.snapshot().len(), 3);
/// assert!(handle.reload(Vec::new()).is_err());
/// assert_eq!(reader.snapshot().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EngineHandle {
    current: Arc<RwLock<Arc<RecommendationEngine>>>,
}

impl EngineHandle {
    /// Wrap an already fitted engine.
    #[must_use]
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    /// Fit an engine over `catalog` and wrap it.
    ///
    /// # Errors
    /// Propagates [`RankerError`] from [`RecommendationEngine::new`].
    pub fn from_catalog(catalog: Vec<FoodItem>) -> Result<Self, RankerError> {
        RecommendationEngine::new(catalog).map(Self::new)
    }

    /// Engine serving queries right now.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RecommendationEngine> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Fit `catalog` and swap it in.
    ///
    /// # Errors
    /// Returns the fitting error and keeps the previous engine when the
    /// catalog is rejected.
    pub fn reload(&self, catalog: Vec<FoodItem>) -> Result<(), RankerError> {
        let engine = RecommendationEngine::new(catalog)?;
        log::info!("reloaded catalog with {} foods", engine.len());
        let previous = self.replace(engine);
        log::debug!("retired engine with {} foods", previous.len());
        Ok(())
    }

    /// Swap in an already fitted engine, returning the one it replaces.
    #[must_use = "the previous engine is returned for inspection"]
    pub fn replace(&self, engine: RecommendationEngine) -> Arc<RecommendationEngine> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(engine))
    }
}

impl Recommender for EngineHandle {
    fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation> {
        self.snapshot().recommend(query)
    }

    fn find_alternatives(&self, query: &AlternativesQuery) -> Vec<Recommendation> {
        self.snapshot().find_alternatives(query)
    }
}
