//! The ranking strategy contract.

use crate::domain::Journey;

use super::RankError;

/// A named, swappable journey ranking algorithm.
///
/// Implementations take ownership of the candidate list for the duration of
/// the call and hand back the same journeys in ranked order, most desirable
/// first. They must:
/// - return an empty list for empty input, never an error;
/// - neither add nor drop journeys;
/// - keep the input relative order of journeys whose scores tie.
///
/// Implementations are shared across concurrent requests through the
/// registry, so they must be `Send + Sync` and hold no per-call state.
pub trait RankingStrategy: Send + Sync {
    /// The lowercase name this strategy is registered under.
    fn name(&self) -> &'static str;

    /// Rank `journeys`, best first.
    fn rank(&self, journeys: Vec<Journey>) -> Result<Vec<Journey>, RankError>;
}
