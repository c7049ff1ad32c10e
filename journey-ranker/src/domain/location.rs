//! Location types.

use std::fmt;

/// Identity of a stop, unique within one ranking call.
///
/// Two [`Location`] values with the same `LocationId` are the same physical
/// stop, even when they appear on different journeys. The id is the key
/// under which usage statistics are aggregated.
///
/// # Examples
///
/// ```
/// use journey_ranker::domain::LocationId;
///
/// let id = LocationId(42);
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(format!("{id:?}"), "LocationId(42)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub i64);

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        LocationId(id)
    }
}

/// A stop on a journey, plus the usage aggregates computed while scoring.
///
/// The aggregates describe the location across the whole candidate set, not
/// the journey this value happens to sit on. They are reset at the start of
/// every scoring run, so values supplied by a caller are never trusted.
/// They are signed so that any integer a caller sends survives the wire,
/// including negatives; scoring overwrites them anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Stop identity
    pub id: LocationId,

    /// Sum of stop counts of every journey passing through this location
    pub trips_total: i64,

    /// Number of times this location is used by a journey
    pub num_trip_stops: i64,
}

impl Location {
    /// Creates a location with zeroed aggregates.
    pub fn new(id: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            trips_total: 0,
            num_trip_stops: 0,
        }
    }
}
