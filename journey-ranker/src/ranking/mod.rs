//! Journey desirability ranking.
//!
//! Candidate journeys arrive already filtered by an upstream route
//! generator. This module scores and orders them with a strategy chosen by
//! name at request time:
//!
//! - [`StrategyRegistry`] maps case-insensitive names to strategies.
//! - [`Ranker`] binds one strategy and runs it.
//! - [`SamEmily`] scores journeys from location usage across the whole
//!   candidate set.
//! - [`Co2Min`] is a registered pass-through.

mod co2_min;
mod error;
mod registry;
mod sam_emily;
mod service;
mod strategy;
mod universe;

pub use co2_min::Co2Min;
pub use error::RankError;
pub use registry::StrategyRegistry;
pub use sam_emily::{InvalidStopRatio, SamEmily, StopRatio};
pub use service::Ranker;
pub use strategy::RankingStrategy;
pub use universe::{JourneyTotals, LocationUniverse, LocationUsage, UsageOverflow};
