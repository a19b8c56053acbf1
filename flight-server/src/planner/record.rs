//! Search result records.
//!
//! The serialized shape returned to callers of the search. Field names
//! match the upstream flight-events wire format so the two ends of the
//! service speak the same dialect.

use serde::Serialize;

use crate::domain::{FlightEvent, Journey};

/// One leg of a journey result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    /// Flight number, e.g. "IB1234"
    pub flight_number: String,

    /// Departure time, RFC 3339 UTC
    pub departure_datetime: String,

    /// Arrival time, RFC 3339 UTC
    pub arrival_datetime: String,

    /// Origin city code
    pub departure_city: String,

    /// Destination city code
    pub arrival_city: String,
}

impl FlightRecord {
    /// Project a flight event into its record form.
    pub fn from_event(event: &FlightEvent) -> Self {
        Self {
            flight_number: event.flight_number().as_str().to_string(),
            departure_datetime: event.departure_time().to_rfc3339(),
            arrival_datetime: event.arrival_time().to_rfc3339(),
            departure_city: event.origin().as_str().to_string(),
            arrival_city: event.destination().as_str().to_string(),
        }
    }
}

/// A journey in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyRecord {
    /// Number of legs in the journey
    pub connections: usize,

    /// The legs, in travel order
    pub path: Vec<FlightRecord>,
}

impl JourneyRecord {
    /// Project an accepted journey into its record form.
    pub fn from_journey(journey: &Journey<'_>) -> Self {
        Self {
            connections: journey.leg_count(),
            path: journey
                .flights()
                .iter()
                .map(|event| FlightRecord::from_event(event))
                .collect(),
        }
    }
}
