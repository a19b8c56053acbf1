//! Conversion from wire DTOs to domain types.
//!
//! Every upstream record is validated into domain value objects the moment
//! it is received. A single malformed record fails the whole response: bad
//! flight data is an upstream fault, not a search outcome.

use crate::domain::{CityCode, FlightEvent, FlightNumber, UtcInstant};

use super::types::FlightEventRecord;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a flight number
    #[error("invalid flight number: {0}")]
    InvalidFlightNumber(String),

    /// Failed to parse a city code
    #[error("invalid city code: {0}")]
    InvalidCity(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Times parsed but the flight itself is inconsistent
    #[error("invalid flight {flight_number}: {reason}")]
    InvalidFlight {
        flight_number: String,
        reason: String,
    },
}

/// Convert a full API response into domain flight events.
///
/// Fails on the first invalid record.
pub fn convert_events(records: &[FlightEventRecord]) -> Result<Vec<FlightEvent>, ConversionError> {
    records.iter().map(convert_event).collect()
}

/// Convert a single wire record into a domain flight event.
pub fn convert_event(record: &FlightEventRecord) -> Result<FlightEvent, ConversionError> {
    let flight_number = FlightNumber::parse(&record.flight_number)
        .map_err(|_| ConversionError::InvalidFlightNumber(record.flight_number.clone()))?;

    let origin = CityCode::parse(&record.departure_city)
        .map_err(|_| ConversionError::InvalidCity(record.departure_city.clone()))?;
    let destination = CityCode::parse(&record.arrival_city)
        .map_err(|_| ConversionError::InvalidCity(record.arrival_city.clone()))?;

    let departure = UtcInstant::parse(&record.departure_datetime)
        .map_err(|_| ConversionError::InvalidTimestamp(record.departure_datetime.clone()))?;
    let arrival = UtcInstant::parse(&record.arrival_datetime)
        .map_err(|_| ConversionError::InvalidTimestamp(record.arrival_datetime.clone()))?;

    FlightEvent::new(flight_number, departure, arrival, origin, destination).map_err(|e| {
        ConversionError::InvalidFlight {
            flight_number: record.flight_number.clone(),
            reason: e.to_string(),
        }
    })
}
