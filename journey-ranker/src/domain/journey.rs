//! Journey types.
//!
//! A `Journey` is one candidate route produced by the upstream route
//! generator: an ordered list of locations plus the desirability score a
//! ranking strategy assigns to it.

use super::{Location, LocationId};

/// A candidate journey.
///
/// Journeys are plain input values. No invariant is enforced at
/// construction: an empty journey is representable so that each ranking
/// strategy can decide whether it is acceptable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Locations in route order
    pub locations: Vec<Location>,

    /// Route length reported by the route generator, carried through as-is
    pub total_distance_km: i32,

    /// Score written by the last ranking strategy that scored this journey
    pub desirability: f64,
}

impl Journey {
    /// Constructs an unscored journey from its locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_ranker::domain::{Journey, Location};
    ///
    /// let journey = Journey::new(vec![Location::new(1), Location::new(2)]);
    /// assert_eq!(journey.stop_count(), 2);
    /// assert_eq!(journey.desirability, 0.0);
    /// ```
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            total_distance_km: 0,
            desirability: 0.0,
        }
    }

    /// Constructs an unscored journey from bare location ids.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LocationId>,
    {
        Self::new(ids.into_iter().map(Location::new).collect())
    }

    /// Sets the reported route length.
    pub fn with_distance_km(mut self, km: i32) -> Self {
        self.total_distance_km = km;
        self
    }

    /// Returns the number of locations on this journey.
    pub fn stop_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the journey has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns the location ids in route order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.iter().map(|l| l.id)
    }
}
