//! Request-scoped location usage aggregates.
//!
//! The universe is built fresh inside every ranking call and dropped when
//! the call returns. Nothing here is cached between calls, which is what
//! keeps concurrent requests isolated from each other.

use std::collections::HashMap;

use super::RankError;
use crate::domain::{Journey, Location, LocationId};

/// A location aggregate no longer fits in its counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("location usage overflows")]
pub struct UsageOverflow;

impl UsageOverflow {
    /// Reports the overflow against the journey at `index`.
    pub fn at(self, index: usize) -> RankError {
        RankError::InvalidJourney {
            index,
            reason: "location usage overflows",
        }
    }
}

/// Usage of one location across the whole candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationUsage {
    /// Sum of the stop counts of every journey using this location.
    pub trips_total: u64,

    /// Number of journey occurrences of this location.
    pub num_trip_stops: u64,
}

impl LocationUsage {
    /// Copies the aggregates onto a location value.
    ///
    /// Aggregates beyond `i64::MAX` saturate.
    pub fn apply_to(&self, location: &mut Location) {
        location.trips_total = i64::try_from(self.trips_total).unwrap_or(i64::MAX);
        location.num_trip_stops = i64::try_from(self.num_trip_stops).unwrap_or(i64::MAX);
    }
}

/// Per-journey sums over the journey's own locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JourneyTotals {
    /// Sum of `trips_total` over the journey's locations.
    pub trips_total: u64,

    /// Sum of `num_trip_stops` over the journey's locations.
    pub num_trip_stops: u64,
}

/// The distinct locations seen across one set of journeys, keyed by id.
#[derive(Debug, Default)]
pub struct LocationUniverse {
    usage: HashMap<LocationId, LocationUsage>,
}

impl LocationUniverse {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate usage over every location occurrence in `journeys`.
    ///
    /// Each occurrence adds the owning journey's stop count to
    /// `trips_total` and one to `num_trip_stops`. A location repeated
    /// within a single journey is counted once per occurrence.
    ///
    /// Fails with `InvalidJourney` at the first journey whose contribution
    /// overflows a counter.
    pub fn accumulate(journeys: &[Journey]) -> Result<Self, RankError> {
        let mut universe = Self::new();
        for (index, journey) in journeys.iter().enumerate() {
            universe.record(journey).map_err(|e| e.at(index))?;
        }
        Ok(universe)
    }

    /// Record one journey's contribution.
    pub fn record(&mut self, journey: &Journey) -> Result<(), UsageOverflow> {
        let stops = journey.stop_count() as u64;
        for id in journey.location_ids() {
            let usage = self.usage.entry(id).or_default();
            usage.trips_total = usage.trips_total.checked_add(stops).ok_or(UsageOverflow)?;
            usage.num_trip_stops = usage.num_trip_stops.checked_add(1).ok_or(UsageOverflow)?;
        }
        Ok(())
    }

    /// Returns the aggregates for a location, if it has been seen.
    pub fn get(&self, id: LocationId) -> Option<&LocationUsage> {
        self.usage.get(&id)
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.usage.len()
    }

    /// Returns true if no location has been recorded.
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Sum the universe aggregates over a journey's locations.
    ///
    /// Locations the universe has never seen contribute nothing.
    pub fn totals_for(&self, journey: &Journey) -> Result<JourneyTotals, UsageOverflow> {
        journey
            .location_ids()
            .filter_map(|id| self.get(id))
            .try_fold(JourneyTotals::default(), |acc, usage| {
                Ok::<_, UsageOverflow>(JourneyTotals {
                    trips_total: acc
                        .trips_total
                        .checked_add(usage.trips_total)
                        .ok_or(UsageOverflow)?,
                    num_trip_stops: acc
                        .num_trip_stops
                        .checked_add(usage.num_trip_stops)
                        .ok_or(UsageOverflow)?,
                })
            })
    }

    /// Overwrite every location on `journey` with its universe aggregates.
    pub fn annotate(&self, journey: &mut Journey) {
        for location in &mut journey.locations {
            if let Some(usage) = self.usage.get(&location.id) {
                usage.apply_to(location);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(universe: &LocationUniverse, id: i64) -> LocationUsage {
        *universe.get(LocationId(id)).unwrap()
    }

    #[test]
    fn empty_input() {
        let universe = LocationUniverse::accumulate(&[]).unwrap();
        assert!(universe.is_empty());
        assert_eq!(universe.len(), 0);
    }

    #[test]
    fn shared_location_accumulates_across_journeys() {
        let journeys = vec![Journey::from_ids([1, 2]), Journey::from_ids([2, 3])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();

        assert_eq!(universe.len(), 3);
        assert_eq!(
            usage(&universe, 1),
            LocationUsage {
                trips_total: 2,
                num_trip_stops: 1
            }
        );
        assert_eq!(
            usage(&universe, 2),
            LocationUsage {
                trips_total: 4,
                num_trip_stops: 2
            }
        );
        assert_eq!(
            usage(&universe, 3),
            LocationUsage {
                trips_total: 2,
                num_trip_stops: 1
            }
        );
    }

    #[test]
    fn trips_total_sums_journey_lengths() {
        // Location 1 sits on a 1-stop and a 4-stop journey
        let journeys = vec![Journey::from_ids([1]), Journey::from_ids([1, 2, 3, 4])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();

        assert_eq!(usage(&universe, 1).trips_total, 5);
        assert_eq!(usage(&universe, 1).num_trip_stops, 2);
    }

    #[test]
    fn repeated_location_counts_each_occurrence() {
        let journeys = vec![Journey::from_ids([9, 9, 8])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();

        assert_eq!(universe.len(), 2);
        assert_eq!(usage(&universe, 9).num_trip_stops, 2);
        assert_eq!(usage(&universe, 9).trips_total, 6);
    }

    #[test]
    fn caller_supplied_aggregates_are_ignored() {
        let mut loc = Location::new(1);
        loc.trips_total = 1000;
        loc.num_trip_stops = 1000;
        let journeys = vec![Journey::new(vec![loc])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();

        assert_eq!(
            usage(&universe, 1),
            LocationUsage {
                trips_total: 1,
                num_trip_stops: 1
            }
        );
    }

    #[test]
    fn totals_for_journey() {
        let journeys = vec![Journey::from_ids([1, 2]), Journey::from_ids([2, 3])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();

        assert_eq!(
            universe.totals_for(&journeys[0]).unwrap(),
            JourneyTotals {
                trips_total: 6,
                num_trip_stops: 3
            }
        );
    }

    #[test]
    fn annotate_writes_aggregates_on_every_occurrence() {
        let mut journeys = vec![Journey::from_ids([1, 2]), Journey::from_ids([2, 3])];
        let universe = LocationUniverse::accumulate(&journeys).unwrap();
        for journey in &mut journeys {
            universe.annotate(journey);
        }

        assert_eq!(journeys[0].locations[1].trips_total, 4);
        assert_eq!(journeys[1].locations[0].trips_total, 4);
        assert_eq!(journeys[0].locations[1], journeys[1].locations[0]);
    }

    #[test]
    fn record_rejects_trips_total_overflow() {
        let mut universe = LocationUniverse::new();
        universe.usage.insert(
            LocationId(1),
            LocationUsage {
                trips_total: u64::MAX,
                num_trip_stops: 1,
            },
        );

        assert_eq!(universe.record(&Journey::from_ids([1])), Err(UsageOverflow));
    }

    #[test]
    fn totals_reject_overflow_from_repeated_location() {
        let mut universe = LocationUniverse::new();
        universe.usage.insert(
            LocationId(1),
            LocationUsage {
                trips_total: u64::MAX / 2 + 1,
                num_trip_stops: 2,
            },
        );

        assert_eq!(universe.totals_for(&Journey::from_ids([1, 1])), Err(UsageOverflow));
        assert!(universe.totals_for(&Journey::from_ids([1])).is_ok());
    }

    #[test]
    fn overflow_names_the_journey() {
        assert_eq!(
            UsageOverflow.at(4),
            RankError::InvalidJourney {
                index: 4,
                reason: "location usage overflows"
            }
        );
    }

    #[test]
    fn annotate_saturates_aggregates_beyond_i64() {
        let mut universe = LocationUniverse::new();
        universe.usage.insert(
            LocationId(1),
            LocationUsage {
                trips_total: u64::MAX,
                num_trip_stops: 3,
            },
        );
        let mut journey = Journey::from_ids([1]);
        universe.annotate(&mut journey);

        assert_eq!(journey.locations[0].trips_total, i64::MAX);
        assert_eq!(journey.locations[0].num_trip_stops, 3);
    }
}
