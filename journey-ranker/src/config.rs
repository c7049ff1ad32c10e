//! Server configuration.
//!
//! Every setting has a default and can be overridden from the environment.

use std::net::SocketAddr;

use crate::ranking::{InvalidStopRatio, SamEmily, StopRatio, StrategyRegistry};

/// Environment variable for the listen address.
pub const ENV_ADDR: &str = "JOURNEY_RANKER_ADDR";

/// Environment variable for the algorithm used when a request names none.
pub const ENV_DEFAULT_ALGORITHM: &str = "JOURNEY_RANKER_DEFAULT_ALGORITHM";

/// Environment variable selecting sam-emily's stop ratio division.
pub const ENV_STOP_RATIO: &str = "JOURNEY_RANKER_STOP_RATIO";

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address does not parse
    #[error("invalid JOURNEY_RANKER_ADDR {value:?}: {message}")]
    InvalidAddr { value: String, message: String },

    /// The stop ratio mode is unknown
    #[error("invalid JOURNEY_RANKER_STOP_RATIO: {0}")]
    InvalidStopRatio(#[from] InvalidStopRatio),

    /// The default algorithm is not registered
    #[error("default algorithm {0:?} is not registered")]
    UnknownDefaultAlgorithm(String),
}

/// Configuration for the ranking server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Algorithm used when a request omits `algorithmName`.
    pub default_algorithm: String,

    /// Division mode for the sam-emily stop ratio.
    pub stop_ratio: StopRatio,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_ADDR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
                    message: e.to_string(),
                    value,
                })?;
        }

        if let Some(value) = get(ENV_DEFAULT_ALGORITHM) {
            config.default_algorithm = value.trim().to_string();
        }

        if let Some(value) = get(ENV_STOP_RATIO) {
            config.stop_ratio = value.trim().parse()?;
        }

        Ok(config)
    }

    /// Build the strategy registry this configuration describes.
    ///
    /// Fails if the default algorithm is not among the registered names.
    pub fn registry(&self) -> Result<StrategyRegistry, ConfigError> {
        let registry = StrategyRegistry::with_defaults(self.stop_ratio);
        if !registry.contains(&self.default_algorithm) {
            return Err(ConfigError::UnknownDefaultAlgorithm(
                self.default_algorithm.clone(),
            ));
        }
        Ok(registry)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            default_algorithm: SamEmily::NAME.to_string(),
            stop_ratio: StopRatio::Real,
        }
    }
}
