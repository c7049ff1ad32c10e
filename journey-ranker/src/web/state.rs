//! Application state for the web layer.

use std::sync::Arc;

use crate::config::{ConfigError, ServerConfig};
use crate::ranking::StrategyRegistry;

/// Shared application state.
///
/// Read-only after startup; every request ranks with its own
/// request-scoped state.
#[derive(Clone)]
pub struct AppState {
    /// Registered ranking strategies
    pub registry: Arc<StrategyRegistry>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: StrategyRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Create app state with the registry `config` describes.
    pub fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        let registry = config.registry()?;
        Ok(Self::new(registry, config))
    }
}
