//! The ranking service: bind a strategy by name, then rank with it.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Journey;

use super::registry::StrategyRegistry;
use super::strategy::RankingStrategy;
use super::RankError;

/// Ranks journeys with a strategy selected from a registry.
///
/// A `Ranker` is cheap and request-scoped: create one per call, select an
/// algorithm, rank.
pub struct Ranker<'a> {
    registry: &'a StrategyRegistry,
    strategy: Option<Arc<dyn RankingStrategy>>,
}

impl<'a> Ranker<'a> {
    /// Create a ranker with no strategy bound.
    pub fn new(registry: &'a StrategyRegistry) -> Self {
        Self {
            registry,
            strategy: None,
        }
    }

    /// Resolve `algorithm_name` and bind it.
    ///
    /// On failure the previously bound strategy, if any, is kept.
    pub fn select(&mut self, algorithm_name: &str) -> Result<(), RankError> {
        let strategy = self.registry.resolve(algorithm_name)?;
        debug!(algorithm = strategy.name(), "selected ranking algorithm");
        self.strategy = Some(strategy);
        Ok(())
    }

    /// Name of the bound strategy, if any.
    pub fn selected(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Rank `journeys` with the bound strategy.
    pub fn rank(&self, journeys: Vec<Journey>) -> Result<Vec<Journey>, RankError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(RankError::NoAlgorithmSelected)?;
        strategy.rank(journeys)
    }

    /// Select `algorithm_name`, then rank `journeys` with it.
    pub fn rank_with(
        &mut self,
        journeys: Vec<Journey>,
        algorithm_name: &str,
    ) -> Result<Vec<Journey>, RankError> {
        self.select(algorithm_name)?;
        self.rank(journeys)
    }
}
