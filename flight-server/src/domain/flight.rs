//! Flight event type.
//!
//! A `FlightEvent` is a single flown leg between two cities with its own
//! departure and arrival times.

use super::{CityCode, FlightNumber, UtcInstant};

/// Error returned when constructing an invalid flight event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight: {reason}")]
pub struct InvalidFlight {
    reason: &'static str,
}

/// A single flight leg: one carrier-identified movement between two cities.
///
/// Times are validated at construction so that the departure is always
/// strictly before the arrival; code that receives a `FlightEvent` can rely
/// on its duration being positive.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{CityCode, FlightEvent, FlightNumber, UtcInstant};
///
/// let flight = FlightEvent::new(
///     FlightNumber::parse("IB1234").unwrap(),
///     UtcInstant::parse("2024-09-12T12:00:00Z").unwrap(),
///     UtcInstant::parse("2024-09-12T18:00:00Z").unwrap(),
///     CityCode::parse("BUE").unwrap(),
///     CityCode::parse("MAD").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(flight.duration_hours(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightEvent {
    flight_number: FlightNumber,
    departure: UtcInstant,
    arrival: UtcInstant,
    origin: CityCode,
    destination: CityCode,
}

impl FlightEvent {
    /// Construct a flight event, validating its times.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the departure is not strictly before the arrival.
    pub fn new(
        flight_number: FlightNumber,
        departure: UtcInstant,
        arrival: UtcInstant,
        origin: CityCode,
        destination: CityCode,
    ) -> Result<Self, InvalidFlight> {
        if !departure.is_before(&arrival) {
            return Err(InvalidFlight {
                reason: "departure must be before arrival",
            });
        }

        Ok(FlightEvent {
            flight_number,
            departure,
            arrival,
            origin,
            destination,
        })
    }

    /// Returns the flight number.
    pub fn flight_number(&self) -> &FlightNumber {
        &self.flight_number
    }

    /// Returns the departure time.
    pub fn departure_time(&self) -> UtcInstant {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival_time(&self) -> UtcInstant {
        self.arrival
    }

    /// Returns the origin city.
    pub fn origin(&self) -> &CityCode {
        &self.origin
    }

    /// Returns the destination city.
    pub fn destination(&self) -> &CityCode {
        &self.destination
    }

    /// Returns the flight duration in whole hours.
    ///
    /// Fractional hours truncate toward zero: a 2h59m flight is 2 hours.
    pub fn duration_hours(&self) -> i64 {
        self.arrival.signed_duration_since(self.departure).num_hours()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn base() -> UtcInstant {
        UtcInstant::parse("2024-06-01T00:00:00Z").unwrap()
    }

    fn offset(minutes: i64) -> UtcInstant {
        UtcInstant::parse(
            &(chrono::DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap()
                + Duration::minutes(minutes))
            .to_rfc3339(),
        )
        .unwrap()
    }

    proptest! {
        /// Construction succeeds iff departure is strictly before arrival
        #[test]
        fn strict_ordering_enforced(dep in 0i64..10_000, arr in 0i64..10_000) {
            let result = FlightEvent::new(
                FlightNumber::parse("IB1234").unwrap(),
                offset(dep),
                offset(arr),
                CityCode::parse("BUE").unwrap(),
                CityCode::parse("MAD").unwrap(),
            );
            prop_assert_eq!(result.is_ok(), dep < arr);
        }

        /// duration_hours is the truncated minute distance
        #[test]
        fn duration_truncates(minutes in 1i64..100_000) {
            let f = FlightEvent::new(
                FlightNumber::parse("IB1234").unwrap(),
                base(),
                offset(minutes),
                CityCode::parse("BUE").unwrap(),
                CityCode::parse("MAD").unwrap(),
            )
            .unwrap();
            prop_assert_eq!(f.duration_hours(), minutes / 60);
        }
    }
}
