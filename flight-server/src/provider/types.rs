//! Flight-events API response DTOs.
//!
//! These types map directly to the upstream JSON. Validation lives in
//! `convert`; a record here may carry any string the API chose to send.

use serde::Deserialize;

/// One flight event as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlightEventRecord {
    /// Flight number, e.g. "IB1234".
    pub flight_number: String,

    /// Origin city code.
    pub departure_city: String,

    /// Destination city code.
    pub arrival_city: String,

    /// Departure timestamp, e.g. "2023-12-31T23:59:59.000Z".
    pub departure_datetime: String,

    /// Arrival timestamp.
    pub arrival_datetime: String,
}
