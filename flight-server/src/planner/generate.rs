//! Candidate journey generation.
//!
//! Enumerates direct and one-connection journeys from a flat flight-event
//! set. Candidates that fail the journey's temporal checks are silently
//! dropped; they are not errors of the search as a whole.

use tracing::debug;

use crate::domain::{CityCode, FlightEvent, InvalidCityCode, Journey, JourneyConstraints};

/// Enumerate all journeys that could satisfy a query.
///
/// For each event in input order, a direct journey is tried when the event
/// matches the requested route exactly; then every other event whose origin
/// equals this event's destination is tried as a connecting second leg.
/// Connecting pairs are kept regardless of where the second leg lands —
/// only the journey's own temporal checks filter them.
///
/// Results come back in discovery order, without de-duplication or
/// ranking. The pair scan is O(n²), which is fine for the small per-route,
/// per-date sets the provider returns.
///
/// # Errors
///
/// Returns `Err` if `from` or `to` is not a valid city code; malformed
/// query input is an error of the whole search, never swallowed.
pub fn generate_journeys<'a>(
    events: &'a [FlightEvent],
    from: &str,
    to: &str,
    constraints: &'a JourneyConstraints,
) -> Result<Vec<Journey<'a>>, InvalidCityCode> {
    let from = CityCode::parse(from)?;
    let to = CityCode::parse(to)?;

    let mut journeys = Vec::new();

    for (i, first) in events.iter().enumerate() {
        if *first.origin() == from && *first.destination() == to {
            push_if_valid(&mut journeys, vec![first], constraints);
        }

        for (j, second) in events.iter().enumerate() {
            if i == j {
                continue;
            }
            if first.destination() == second.origin() {
                push_if_valid(&mut journeys, vec![first, second], constraints);
            }
        }
    }

    debug!(
        events = events.len(),
        journeys = journeys.len(),
        %from,
        %to,
        "journey generation finished"
    );

    Ok(journeys)
}

/// Keep a candidate only if it constructs cleanly and fits the duration
/// limit.
fn push_if_valid<'a>(
    journeys: &mut Vec<Journey<'a>>,
    flights: Vec<&'a FlightEvent>,
    constraints: &'a JourneyConstraints,
) {
    if let Ok(journey) = Journey::new(flights, constraints) {
        if journey.is_valid() {
            journeys.push(journey);
        }
    }
}
