//! Name-to-strategy registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::co2_min::Co2Min;
use super::sam_emily::{SamEmily, StopRatio};
use super::strategy::RankingStrategy;
use super::RankError;

/// Maps case-insensitive algorithm names to strategy instances.
///
/// Built once at startup and then shared read-only, so resolution from
/// concurrent requests needs no locking. Every name resolves to the same
/// `Arc` for the lifetime of the registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use journey_ranker::ranking::{StopRatio, StrategyRegistry};
///
/// let registry = StrategyRegistry::with_defaults(StopRatio::Real);
/// let a = registry.resolve("SAM-EMILY").unwrap();
/// let b = registry.resolve("sam-emily").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert!(registry.resolve("bogus").is_err());
/// ```
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn RankingStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies.
    pub fn with_defaults(stop_ratio: StopRatio) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SamEmily::new(stop_ratio)));
        registry.register(Arc::new(Co2Min));
        registry
    }

    /// Register a strategy under its lowercase name.
    ///
    /// Only ASCII letters are lowercased; see [`resolve`](Self::resolve).
    /// Replaces any strategy previously registered under the same name.
    pub fn register(&mut self, strategy: Arc<dyn RankingStrategy>) {
        self.strategies
            .insert(strategy.name().to_ascii_lowercase(), strategy);
    }

    /// Resolve an algorithm name, ignoring ASCII case.
    ///
    /// Case folding is ASCII-only: `"SAM-EMILY"` matches `"sam-emily"`, but
    /// non-ASCII letters must match exactly (`"É"` does not match `"é"`).
    /// Strategies with non-ASCII names are found only by that exact spelling
    /// of their non-ASCII characters.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn RankingStrategy>, RankError> {
        self.strategies
            .get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| RankError::UnknownAlgorithm(name.to_string()))
    }

    /// Returns true if `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("names", &self.names())
            .finish()
    }
}
