//! The "sam-emily" desirability algorithm.
//!
//! Favours journeys that pass through locations many other candidates also
//! rely on, relative to the journey's own length, normalised by the size of
//! the whole location universe.
//!
//! Scoring runs in three passes over the candidate set:
//! 1. Accumulate per-location usage across every journey.
//! 2. Score each journey from the usage of its own locations:
//!    `(Σ num_trip_stops / stop_count) * distinct_locations / Σ trips_total`.
//! 3. Stable-sort descending by score.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::domain::Journey;

use super::strategy::RankingStrategy;
use super::universe::{JourneyTotals, LocationUniverse};
use super::RankError;

/// How `Σ num_trip_stops` is divided by the journey's stop count.
///
/// Dividing the two integer counts directly truncates before
/// multiplying. `Real` keeps the fractional part and is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopRatio {
    /// Floating-point division.
    #[default]
    Real,
    /// Integer division, truncating toward zero.
    Truncating,
}

impl StopRatio {
    /// Divide `stops_used` by `stop_count` under this mode.
    ///
    /// `stop_count` must be non-zero.
    pub fn apply(self, stops_used: u64, stop_count: u64) -> f64 {
        match self {
            StopRatio::Real => stops_used as f64 / stop_count as f64,
            StopRatio::Truncating => (stops_used / stop_count) as f64,
        }
    }

    /// Returns the configuration spelling of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            StopRatio::Real => "real",
            StopRatio::Truncating => "truncating",
        }
    }
}

impl fmt::Display for StopRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown stop ratio mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ratio {0:?}: expected \"real\" or \"truncating\"")]
pub struct InvalidStopRatio(String);

impl FromStr for StopRatio {
    type Err = InvalidStopRatio;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("real") {
            Ok(StopRatio::Real)
        } else if s.eq_ignore_ascii_case("truncating") {
            Ok(StopRatio::Truncating)
        } else {
            Err(InvalidStopRatio(s.to_string()))
        }
    }
}

/// The sam-emily ranking strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamEmily {
    stop_ratio: StopRatio,
}

impl SamEmily {
    /// Registered name.
    pub const NAME: &'static str = "sam-emily";

    /// Create the strategy with the given division mode.
    pub fn new(stop_ratio: StopRatio) -> Self {
        Self { stop_ratio }
    }

    /// Compute one journey's desirability.
    ///
    /// Returns `None` when the score is undefined: zero stops, zero total
    /// trips, or a non-finite result.
    pub fn desirability(
        &self,
        totals: JourneyTotals,
        stop_count: usize,
        distinct_locations: usize,
    ) -> Option<f64> {
        if stop_count == 0 || totals.trips_total == 0 {
            return None;
        }

        let ratio = self.stop_ratio.apply(totals.num_trip_stops, stop_count as u64);
        let score = ratio * distinct_locations as f64 * (1.0 / totals.trips_total as f64);

        score.is_finite().then_some(score)
    }
}

/// Reject input the formula cannot score.
///
/// Runs before accumulation so that nothing is scored when any journey is
/// malformed.
fn validate(journeys: &[Journey]) -> Result<(), RankError> {
    match journeys.iter().position(Journey::is_empty) {
        Some(index) => Err(RankError::InvalidJourney {
            index,
            reason: "journey has no locations",
        }),
        None => Ok(()),
    }
}

impl RankingStrategy for SamEmily {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn rank(&self, mut journeys: Vec<Journey>) -> Result<Vec<Journey>, RankError> {
        validate(&journeys)?;

        let universe = LocationUniverse::accumulate(&journeys)?;
        let distinct_locations = universe.len();

        debug!(
            journeys = journeys.len(),
            distinct_locations,
            stop_ratio = %self.stop_ratio,
            "accumulated location usage"
        );

        for (index, journey) in journeys.iter_mut().enumerate() {
            let totals = universe.totals_for(journey).map_err(|e| e.at(index))?;
            let score = self
                .desirability(totals, journey.stop_count(), distinct_locations)
                .ok_or(RankError::InvalidJourney {
                    index,
                    reason: "location usage sums to zero",
                })?;

            journey.desirability = score;
            universe.annotate(journey);

            trace!(
                index,
                stops = journey.stop_count(),
                trips_total = totals.trips_total,
                num_trip_stops = totals.num_trip_stops,
                desirability = score,
                "scored journey"
            );
        }

        // sort_by is stable, so tied journeys keep their input order
        journeys.sort_by(|a, b| b.desirability.total_cmp(&a.desirability));

        Ok(journeys)
    }
}
