//! Journey type.
//!
//! A `Journey` is a candidate trip of one or two flight legs, validated
//! for temporal consistency against a set of constraints.

use super::{FlightEvent, JourneyConstraints};

/// Error returned when constructing an invalid journey.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid journey: {reason}")]
pub struct InvalidJourney {
    reason: &'static str,
}

impl InvalidJourney {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A candidate trip of one or two flight legs.
///
/// The journey borrows the flight events it was built from and the
/// constraints it is checked against; it owns neither.
///
/// # Invariants
///
/// - 1 or 2 legs (the two-leg cap is structural, not configurable)
/// - Consecutive legs are in chronological order: a leg's arrival is never
///   after the next leg's departure (equal instants are a legal zero-gap
///   connection)
/// - The gap between consecutive legs, in whole truncated hours, is within
///   the constraints' connection limit
///
/// Whether consecutive legs share an airport is deliberately not checked
/// here; routing policy belongs to the candidate generator.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{
///     CityCode, FlightEvent, FlightNumber, Journey, JourneyConstraints, UtcInstant,
/// };
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
/// let constraints = JourneyConstraints::default();
/// let journey = Journey::new(vec![&flight], &constraints).unwrap();
///
/// assert_eq!(journey.leg_count(), 1);
/// assert!(journey.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Journey<'a> {
    flights: Vec<&'a FlightEvent>,
    constraints: &'a JourneyConstraints,
}

impl<'a> Journey<'a> {
    /// Construct a journey, validating the leg sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the sequence is empty or has more than 2 legs
    /// - a leg's arrival is after the next leg's departure
    /// - the gap between consecutive legs exceeds the constraints'
    ///   connection limit
    pub fn new(
        flights: Vec<&'a FlightEvent>,
        constraints: &'a JourneyConstraints,
    ) -> Result<Self, InvalidJourney> {
        if flights.is_empty() {
            return Err(InvalidJourney::new("no legs"));
        }
        if flights.len() > 2 {
            return Err(InvalidJourney::new("too many legs"));
        }

        for pair in flights.windows(2) {
            let arrival = pair[0].arrival_time();
            let departure = pair[1].departure_time();

            if arrival.is_after(&departure) {
                return Err(InvalidJourney::new("out of order"));
            }

            let gap_hours = departure.signed_duration_since(arrival).num_hours();
            if gap_hours > constraints.max_connection_hours() {
                return Err(InvalidJourney::new("connection too long"));
            }
        }

        Ok(Journey {
            flights,
            constraints,
        })
    }

    /// Returns the legs in order.
    pub fn flights(&self) -> &[&'a FlightEvent] {
        &self.flights
    }

    /// Returns the number of legs (1 or 2).
    pub fn leg_count(&self) -> usize {
        self.flights.len()
    }

    /// Total elapsed time in whole hours, first departure to last arrival.
    ///
    /// Fractional hours truncate toward zero, matching
    /// [`FlightEvent::duration_hours`].
    pub fn duration_hours(&self) -> i64 {
        // Safe: validated non-empty at construction
        let first = self.flights.first().unwrap();
        let last = self.flights.last().unwrap();

        last.arrival_time()
            .signed_duration_since(first.departure_time())
            .num_hours()
    }

    /// Returns true if the total duration is within the constraints' limit.
    ///
    /// The duration limit is the only constraint consulted here; the
    /// connection gap is enforced at construction.
    pub fn is_valid(&self) -> bool {
        self.duration_hours() <= self.constraints.max_duration_hours()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{CityCode, FlightNumber, UtcInstant};
    use chrono::Duration;
    use proptest::prelude::*;

    fn at(minutes: i64) -> UtcInstant {
        UtcInstant::parse(
            &(chrono::DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap()
                + Duration::minutes(minutes))
            .to_rfc3339(),
        )
        .unwrap()
    }

    fn flight_between(dep_min: i64, arr_min: i64) -> FlightEvent {
        FlightEvent::new(
            FlightNumber::parse("IB1234").unwrap(),
            at(dep_min),
            at(arr_min),
            CityCode::parse("BUE").unwrap(),
            CityCode::parse("MAD").unwrap(),
        )
        .unwrap()
    }

    proptest! {
        /// A two-leg journey is accepted iff the legs are ordered and the
        /// gap fits the connection limit
        #[test]
        fn two_leg_acceptance(
            first_len in 1i64..600,
            gap in -300i64..900,
            second_len in 1i64..600,
        ) {
            let f1 = flight_between(0, first_len);
            let f2_dep = first_len + gap;
            let f2 = flight_between(f2_dep, f2_dep + second_len);

            let constraints = JourneyConstraints::default();
            let result = Journey::new(vec![&f1, &f2], &constraints);

            let ordered = gap >= 0;
            let gap_ok = gap / 60 <= constraints.max_connection_hours();
            prop_assert_eq!(result.is_ok(), ordered && gap_ok);
        }

        /// is_valid is exactly the duration comparison
        #[test]
        fn validity_is_duration_check(total_mins in 1i64..4000) {
            let f = flight_between(0, total_mins);
            let constraints = JourneyConstraints::default();
            let journey = Journey::new(vec![&f], &constraints).unwrap();

            prop_assert_eq!(
                journey.is_valid(),
                total_mins / 60 <= constraints.max_duration_hours()
            );
        }
    }
}
