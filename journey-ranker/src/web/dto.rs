//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Location, LocationId};

/// Query parameters for the desirability endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesirabilityQuery {
    /// Algorithm to rank with; the server default when absent
    pub algorithm_name: Option<String>,
}

/// A location on a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    /// Location identity
    pub location_id: i64,

    /// Sum of stop counts of journeys through this location. Accepted but
    /// not trusted: scoring recomputes it.
    #[serde(default)]
    pub trips_total: i64,

    /// Number of journey occurrences of this location
    #[serde(default)]
    pub num_trip_stops: i64,
}

/// A journey, as received and as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// Locations in route order
    #[serde(default)]
    pub locations: Vec<LocationDto>,

    /// Route length in kilometres
    #[serde(default)]
    pub total_distance_km: i32,

    /// Desirability score
    #[serde(default)]
    pub desirability_value: f64,
}

/// Response listing the available algorithms.
#[derive(Debug, Serialize)]
pub struct AlgorithmsResponse {
    /// Registered algorithm names, sorted
    pub algorithms: Vec<String>,

    /// Algorithm used when a request names none
    pub default: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Location {
            id: LocationId(dto.location_id),
            trips_total: dto.trips_total,
            num_trip_stops: dto.num_trip_stops,
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            location_id: location.id.0,
            trips_total: location.trips_total,
            num_trip_stops: location.num_trip_stops,
        }
    }
}

impl From<JourneyDto> for Journey {
    fn from(dto: JourneyDto) -> Self {
        Journey {
            locations: dto.locations.into_iter().map(Location::from).collect(),
            total_distance_km: dto.total_distance_km,
            desirability: dto.desirability_value,
        }
    }
}

impl JourneyDto {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            locations: journey.locations.iter().map(LocationDto::from).collect(),
            total_distance_km: journey.total_distance_km,
            desirability_value: journey.desirability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_payload() {
        let body = r#"[
            {
                "locations": [
                    {"locationId": 1, "tripsTotal": 5, "numTripStops": 2},
                    {"locationId": 2, "tripsTotal": 0, "numTripStops": 0}
                ],
                "totalDistanceKm": 14,
                "desirabilityValue": 0.5
            }
        ]"#;

        let journeys: Vec<JourneyDto> = serde_json::from_str(body).unwrap();

        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].locations.len(), 2);
        assert_eq!(journeys[0].locations[0].trips_total, 5);
        assert_eq!(journeys[0].total_distance_km, 14);
        assert_eq!(journeys[0].desirability_value, 0.5);
    }

    #[test]
    fn optional_fields_default() {
        let body = r#"[{"locations": [{"locationId": 7}]}, {}]"#;

        let journeys: Vec<JourneyDto> = serde_json::from_str(body).unwrap();

        assert_eq!(journeys[0].locations[0].location_id, 7);
        assert_eq!(journeys[0].locations[0].trips_total, 0);
        assert_eq!(journeys[0].total_distance_km, 0);
        assert_eq!(journeys[0].desirability_value, 0.0);
        assert!(journeys[1].locations.is_empty());
    }

    #[test]
    fn negative_integers_are_accepted() {
        let body = r#"[{
            "locations": [{"locationId": 1, "tripsTotal": -1, "numTripStops": -7}],
            "totalDistanceKm": -3
        }]"#;

        let journeys: Vec<JourneyDto> = serde_json::from_str(body).unwrap();

        assert_eq!(journeys[0].locations[0].trips_total, -1);
        assert_eq!(journeys[0].locations[0].num_trip_stops, -7);
        assert_eq!(journeys[0].total_distance_km, -3);
    }

    #[test]
    fn missing_location_id_is_rejected() {
        let body = r#"[{"locations": [{"tripsTotal": 1}]}]"#;
        assert!(serde_json::from_str::<Vec<JourneyDto>>(body).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let mut journey = Journey::from_ids([3]).with_distance_km(9);
        journey.desirability = 1.25;

        let json = serde_json::to_value(JourneyDto::from_journey(&journey)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "locations": [{"locationId": 3, "tripsTotal": 0, "numTripStops": 0}],
                "totalDistanceKm": 9,
                "desirabilityValue": 1.25
            })
        );
    }

    #[test]
    fn domain_conversion_keeps_fields() {
        let dto = JourneyDto {
            locations: vec![LocationDto {
                location_id: -4,
                trips_total: 3,
                num_trip_stops: 1,
            }],
            total_distance_km: 2,
            desirability_value: 0.25,
        };

        let journey = Journey::from(dto.clone());

        assert_eq!(journey.locations[0].id, LocationId(-4));
        assert_eq!(journey.desirability, 0.25);
        assert_eq!(JourneyDto::from_journey(&journey), dto);
    }
}
